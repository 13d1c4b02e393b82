//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Duration;

use game_core::Archetype;
use runtime::RuntimeHandle;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::hero_select::show_hero_select;
use crate::presentation::terminal::{self, TerminalGuard, Tui};
use client_frontend_core::{
    BattleNarrator, EventConsumer, Frontend, FrontendConfig, format::display_name,
};

/// Terminal frontend: hero selection followed by the frame-paced game loop.
///
/// The terminal is entered lazily on first use and restored once the game
/// loop ends (or when the frontend is dropped).
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    frame_interval: Duration,
    screen: Option<(Tui, TerminalGuard)>,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig, frame_interval: Duration) -> Self {
        Self {
            frontend_config,
            cli_config,
            frame_interval,
            screen: None,
        }
    }

    fn terminal(&mut self) -> Result<&mut Tui> {
        let screen = match self.screen.take() {
            Some(screen) => screen,
            None => (terminal::init()?, TerminalGuard),
        };
        Ok(&mut self.screen.insert(screen).0)
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn choose_hero(&mut self) -> Result<Option<Archetype>> {
        let terminal = self.terminal()?;
        let hero = show_hero_select(terminal)?;
        tracing::info!(hero = ?hero, "hero selection finished");
        Ok(hero)
    }

    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI client starting...");

        let initial_session = handle.query_session().await?;

        let mut narrator = BattleNarrator::new(&self.frontend_config.messages);
        narrator.message_log_mut().push_text(format!(
            "{} sets out. Walk with the arrow keys or WASD.",
            display_name(initial_session.hero().archetype())
        ));

        let event_loop = EventLoop::new(
            handle,
            narrator,
            &initial_session,
            self.cli_config.clone(),
            self.frame_interval,
        );

        let terminal = self.terminal()?;
        let narrator = event_loop.run(terminal).await?;

        // Dropping the guard leaves the alternate screen.
        self.screen = None;
        tracing::info!(
            messages = narrator.message_log().len(),
            "CLI client exiting"
        );

        Ok(())
    }
}
