// src/config.rs

use crate::{clients::BackendApi, services::dashboard_service::DashboardService};
use anyhow::Context;
use reqwest::Url;
use std::{env, net::SocketAddr, time::Duration};

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

// Configuração lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub server_addr: SocketAddr,
    pub api_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // API_URL tem prioridade; NEXT_PUBLIC_API_BASE fica como alternativa
        let api_url = env::var("API_URL")
            .or_else(|_| env::var("NEXT_PUBLIC_API_BASE"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());
        let api_timeout = match env::var("API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("API_TIMEOUT_SECS inválido: {raw}"))?,
            Err(_) => DEFAULT_API_TIMEOUT_SECS,
        };

        Self::parse(&api_url, &server_addr, api_timeout)
    }

    pub fn parse(api_url: &str, server_addr: &str, api_timeout_secs: u64) -> anyhow::Result<Self> {
        let api_url = Url::parse(api_url).with_context(|| format!("API_URL inválida: {api_url}"))?;
        if api_url.cannot_be_a_base() {
            anyhow::bail!("API_URL precisa ser uma URL http(s): {api_url}");
        }

        let server_addr = server_addr
            .parse()
            .with_context(|| format!("SERVER_ADDR inválido: {server_addr}"))?;

        Ok(Self {
            api_url,
            server_addr,
            api_timeout: Duration::from_secs(api_timeout_secs),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendApi,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // --- Monta o gráfico de dependências ---
        let backend = BackendApi::new(config.api_url.clone(), config.api_timeout)
            .context("Falha ao criar o cliente HTTP")?;
        let dashboard_service = DashboardService::new(backend.clone());

        tracing::info!("✅ API de backend configurada em {}", backend.base_url());

        Ok(Self {
            backend,
            dashboard_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_settings() {
        let config = Config::parse("http://localhost:3000", "127.0.0.1:3001", 5).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.server_addr.port(), 3001);
        assert_eq!(config.api_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_urls_and_addresses() {
        assert!(Config::parse("localhost:3000", "127.0.0.1:3001", 5).is_err());
        assert!(Config::parse("not a url", "127.0.0.1:3001", 5).is_err());
        assert!(Config::parse("http://localhost:3000", "somewhere", 5).is_err());
    }
}
