//! Builds the runtime and config bundle used by front-ends.
use anyhow::{Context, Result};
use game_core::Archetype;
use runtime::Runtime;

use crate::config::ClientConfig;

/// Builder that assembles the runtime and configuration for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
    hero: Option<Archetype>,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            hero: config.hero,
            config,
        }
    }

    /// Override the hero, e.g. after a selection screen.
    pub fn hero(mut self, hero: Archetype) -> Self {
        self.hero = Some(hero);
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let hero = self
            .hero
            .context("A hero must be chosen before the runtime is built")?;

        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .hero(hero)
            .build()
            .await
            .with_context(|| format!("failed to start a session as {hero}"))?;

        tracing::info!(%hero, seed = ?self.config.seed, "runtime built");

        Ok(RuntimeSetup {
            config: self.config,
            hero,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub hero: Archetype,
    pub runtime: Runtime,
}
