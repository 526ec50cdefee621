// src/clients/backend_api.rs

use std::time::Duration;

use reqwest::{header, Client, Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// Falhas ao falar com a API de backend. Nunca chegam ao cliente final:
// o handler troca por uma mensagem fixa e só o log guarda o detalhe.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Error: {0}")]
    Status(StatusCode),

    #[error("Falha de comunicação com a API de backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("URL base da API não aceita caminhos: {0}")]
    InvalidBaseUrl(Url),
}

#[derive(Clone)]
pub struct BackendApi {
    client: Client,
    base_url: Url,
}

impl BackendApi {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Cada segmento é codificado, então um id com "/" não muda a rota
    fn url_for(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(&self, segments: &[&str]) -> Result<Value, UpstreamError> {
        self.send::<()>(Method::GET, segments, None).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<Value, UpstreamError> {
        self.send::<()>(Method::DELETE, segments, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, UpstreamError> {
        self.send(Method::POST, segments, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, UpstreamError> {
        self.send(Method::PUT, segments, Some(body)).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Value, UpstreamError> {
        let url = self.url_for(segments)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(header::CONTENT_TYPE, "application/json");

        if method == Method::GET {
            request = request.header(header::CACHE_CONTROL, "no-store");
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!("{} {} respondeu {}", method, url, status);
            return Err(UpstreamError::Status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> BackendApi {
        BackendApi::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn joins_segments_onto_the_base_url() {
        let url = api("http://localhost:3000").url_for(&["reports", "month", "2025", "3"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/reports/month/2025/3");
    }

    #[test]
    fn keeps_a_base_path_prefix() {
        let url = api("http://backend:8080/v1/").url_for(&["items"]).unwrap();
        assert_eq!(url.as_str(), "http://backend:8080/v1/items");
    }

    #[test]
    fn encodes_path_segments() {
        let url = api("http://localhost:3000").url_for(&["items", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/items/a%2Fb%20c");
    }

    #[test]
    fn status_error_message_matches_the_upstream_code() {
        let err = UpstreamError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Error: 404 Not Found");
    }
}
