pub mod backend_api;
pub use backend_api::{BackendApi, UpstreamError};
