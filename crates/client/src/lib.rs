//! Top-level client orchestrating hero selection, the runtime, and the frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Frontend (hero selection, then the game loop via RuntimeHandle)
//!   └─→ Runtime (built once a hero is known)
//! ```
//!
//! The runtime cannot exist before a hero is chosen, so the client asks the
//! frontend first (unless `QUEST_HERO` already names one) and only then
//! builds the runtime through `client-bootstrap`.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::time::Duration;

use anyhow::Result;
use client_bootstrap::{ClientConfig, RuntimeBuilder, RuntimeSetup};

/// How long to wait for the simulation worker after the frontend exits.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects the configuration and the frontend
/// 2. Client::run() resolves the hero (config or frontend selection)
/// 3. Client::run() builds the runtime and transfers control to the frontend
/// 4. On frontend exit, the runtime worker is shut down
pub struct Client {
    config: ClientConfig,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the player quits.
    ///
    /// Quitting from hero selection is a normal exit and returns `Ok(())`.
    pub async fn run(self) -> Result<()> {
        let Client {
            config,
            mut frontend,
        } = self;

        let hero = match config.hero {
            Some(hero) => hero,
            None => match frontend.choose_hero().await? {
                Some(hero) => hero,
                None => {
                    tracing::info!("No hero chosen, exiting");
                    return Ok(());
                }
            },
        };

        let RuntimeSetup { runtime, .. } = RuntimeBuilder::new(config).hero(hero).build().await?;

        // Run frontend (blocks until user quits)
        let frontend_result = frontend.run(runtime.handle()).await;

        match tokio::time::timeout(SHUTDOWN_GRACE, runtime.shutdown()).await {
            Ok(Ok(())) => tracing::debug!("Runtime worker stopped"),
            Ok(Err(e)) => tracing::warn!("Runtime worker ended with error: {}", e),
            Err(_) => tracing::warn!("Runtime worker did not stop within {:?}", SHUTDOWN_GRACE),
        }

        frontend_result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use anyhow::Result;
    use async_trait::async_trait;
    use game_core::{Archetype, GameMode};
    use runtime::RuntimeHandle;

    use super::*;

    type Seen = Arc<Mutex<Vec<(Archetype, GameMode)>>>;

    /// Frontend that picks a hero and ticks a fixed number of frames.
    struct ScriptedFrontend {
        choice: Option<Archetype>,
        frames: usize,
        seen: Seen,
        asked: Arc<Mutex<bool>>,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn choose_hero(&mut self) -> Result<Option<Archetype>> {
            *self.asked.lock().unwrap() = true;
            Ok(self.choice)
        }

        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            for _ in 0..self.frames {
                handle.tick().await?;
            }
            let session = handle.query_session().await?;
            self.seen
                .lock()
                .unwrap()
                .push((session.hero().archetype(), session.mode()));
            Ok(())
        }
    }

    fn frontend(choice: Option<Archetype>) -> (ScriptedFrontend, Seen, Arc<Mutex<bool>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let asked = Arc::new(Mutex::new(false));
        let frontend = ScriptedFrontend {
            choice,
            frames: 3,
            seen: Arc::clone(&seen),
            asked: Arc::clone(&asked),
        };
        (frontend, seen, asked)
    }

    #[tokio::test]
    async fn runs_with_selected_hero() {
        let (frontend, seen, asked) = frontend(Some(Archetype::Archer));
        let config = ClientConfig {
            seed: Some(7),
            ..ClientConfig::default()
        };

        Client::builder()
            .config(config)
            .frontend(frontend)
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        assert!(*asked.lock().unwrap());
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            [(Archetype::Archer, GameMode::Exploring)]
        );
    }

    #[tokio::test]
    async fn configured_hero_skips_selection() {
        let (frontend, seen, asked) = frontend(None);
        let config = ClientConfig {
            hero: Some(Archetype::Swordsman),
            ..ClientConfig::default()
        };

        Client::builder()
            .config(config)
            .frontend(frontend)
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        assert!(!*asked.lock().unwrap());
        assert_eq!(seen.lock().unwrap()[0].0, Archetype::Swordsman);
    }

    #[tokio::test]
    async fn quitting_selection_exits_cleanly() {
        let (frontend, seen, asked) = frontend(None);

        Client::builder()
            .frontend(frontend)
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        assert!(*asked.lock().unwrap());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn build_requires_frontend() {
        assert!(Client::builder().build().is_err());
    }
}
