use std::sync::Arc;

use crate::config::ServerConfig;
use crate::relay::{ContactRelay, RelayError};

/// Shared handler state. Cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub relay: ContactRelay,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, RelayError> {
        let relay = ContactRelay::new(config.contact_endpoint.clone(), config.contact_timeout)?;
        Ok(Self { config: Arc::new(config), relay })
    }
}
