//! Simulation worker that owns the authoritative [`game_core::GameSession`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), feeds them
//! to the session together with the configured RNG, and publishes what
//! happened to the EventBus.

use tokio::sync::{mpsc, oneshot};

use game_core::{
    BattleEvent, Direction, GameError, GameSession, PlayerAction, RngOracle, TickOutcome,
    TurnReport,
};
use tracing::{debug, info};

use crate::events::{Event, EventBus, SessionEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Advance one frame.
    Tick { reply: oneshot::Sender<TickOutcome> },
    /// Press or release a movement direction. Replies whether it was applied.
    MoveInput {
        direction: Direction,
        pressed: bool,
        reply: oneshot::Sender<bool>,
    },
    /// Submit a battle action. Replies `None` when the action was ignored.
    PlayerAction {
        action: PlayerAction,
        reply: oneshot::Sender<Option<TurnReport>>,
    },
    /// Query the current session (read-only copy).
    QuerySession { reply: oneshot::Sender<GameSession> },
}

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    session: GameSession,
    rng: Box<dyn RngOracle>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    pub fn new(
        session: GameSession,
        rng: Box<dyn RngOracle>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            hero = %session.hero().archetype(),
            position = ?session.position(),
            "SimulationWorker initialized"
        );

        Self {
            session,
            rng,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!("SimulationWorker command channel closed, stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Tick { reply } => {
                let outcome = self.handle_tick();
                if reply.send(outcome).is_err() {
                    debug!("Tick reply channel closed (caller dropped)");
                }
            }
            Command::MoveInput {
                direction,
                pressed,
                reply,
            } => {
                let applied = self.session.on_move_input(direction, pressed);
                if !applied {
                    debug!(%direction, pressed, mode = %self.session.mode(), "ignored movement input");
                }
                if reply.send(applied).is_err() {
                    debug!("MoveInput reply channel closed (caller dropped)");
                }
            }
            Command::PlayerAction { action, reply } => {
                let report = self.handle_player_action(action);
                if reply.send(report).is_err() {
                    debug!("PlayerAction reply channel closed (caller dropped)");
                }
            }
            Command::QuerySession { reply } => {
                if reply.send(self.session.clone()).is_err() {
                    debug!("QuerySession reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_tick(&mut self) -> TickOutcome {
        let outcome = self.session.on_frame_tick(&mut self.rng);

        match outcome {
            TickOutcome::EncounterStarted { enemy } => {
                let frame = self.session.frame();
                let encounter = self.session.encounters();
                info!(%enemy, frame, encounter, "encounter started");
                self.event_bus
                    .publish(Event::Session(SessionEvent::EncounterStarted {
                        enemy,
                        frame,
                        encounter,
                    }));
            }
            TickOutcome::GameOver => self.publish_game_over(),
            _ => {}
        }

        outcome
    }

    /// Runs one battle action through the session.
    ///
    /// Rejected input is logged and dropped so the interface can stay
    /// permissive about what it forwards.
    fn handle_player_action(&mut self, action: PlayerAction) -> Option<TurnReport> {
        let report = match self.session.on_player_action(action, &mut self.rng) {
            Ok(report) => report,
            Err(error) => {
                debug!(%action, code = error.error_code(), "ignored battle input: {error}");
                return None;
            }
        };

        debug!(
            turn = report.turn,
            %action,
            events = report.events().len(),
            "battle turn resolved"
        );

        for event in report.events() {
            self.event_bus.publish(Event::Battle(*event));

            if let BattleEvent::Concluded { outcome, winner } = *event {
                info!(%outcome, ?winner, "battle ended");
                self.event_bus
                    .publish(Event::Session(SessionEvent::BattleEnded { outcome, winner }));
            }
        }

        if self.session.is_over() {
            self.publish_game_over();
        }

        Some(report)
    }

    fn publish_game_over(&self) {
        let frame = self.session.frame();
        info!(frame, "game over");
        self.event_bus
            .publish(Event::Session(SessionEvent::GameOver { frame }));
    }
}
