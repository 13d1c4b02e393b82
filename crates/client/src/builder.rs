//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use client_bootstrap::ClientConfig;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// The frontend is required; configuration falls back to
/// [`ClientConfig::default`].
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<ClientConfig>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend chooses the hero when the configuration does not, then
    /// receives a RuntimeHandle for the rest of the game.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if no frontend was set.
    pub fn build(self) -> Result<Client> {
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            config: self.config.unwrap_or_default(),
            frontend,
        })
    }
}
