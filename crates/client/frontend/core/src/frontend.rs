//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_core::Archetype;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the game via RuntimeHandle:
/// - Subscribe to events (Session, Battle)
/// - Tick frames and forward movement and battle input
/// - Query the current session
///
/// Frontends do NOT own the Runtime - they receive a handle for communication only.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use game_core::Archetype;
/// use runtime::RuntimeHandle;
///
/// struct AutoFrontend;
///
/// #[async_trait]
/// impl Frontend for AutoFrontend {
///     async fn choose_hero(&mut self) -> Result<Option<Archetype>> {
///         Ok(Some(Archetype::Swordsman))
///     }
///
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe(runtime::Topic::Session);
///         loop {
///             handle.tick().await?;
///             if let Ok(event) = events.try_recv() {
///                 println!("{event:?}");
///             }
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Ask the player which hero to play.
    ///
    /// Returns `None` when the player quit before choosing.
    async fn choose_hero(&mut self) -> Result<Option<Archetype>>;

    /// Run the frontend event loop.
    ///
    /// This method receives a RuntimeHandle for communication with the game.
    /// It should block until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
