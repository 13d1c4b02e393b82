//! Client runtime configuration structures and loaders.
use std::env;
use std::time::Duration;

use game_core::{Archetype, GameConfig};
use runtime::RuntimeConfig;

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Hero picked ahead of time; `None` lets the front-end ask.
    pub hero: Option<Archetype>,
    pub seed: Option<u64>,
    /// Logical frames per second, within `1..=GameConfig::MAX_TICK_RATE`.
    pub tick_rate: u32,
    pub event_buffer: usize,
    pub game: GameConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hero: None,
            seed: None,
            tick_rate: Self::DEFAULT_TICK_RATE,
            event_buffer: 100,
            game: GameConfig::default(),
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_TICK_RATE: u32 = 60;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `QUEST_HERO` - Hero tag (`swordsman` or `archer`), skips character select
    /// - `QUEST_SEED` - Seed for a replayable session (default: OS entropy)
    /// - `QUEST_TICK_RATE` - Frames per second, clamped to 1..=144 (default: 60)
    /// - `QUEST_EVENT_BUFFER` - Per-topic event buffer size (default: 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(tag) = lookup("QUEST_HERO") {
            match Archetype::from_tag(&tag) {
                Ok(hero) if hero.is_hero() => config.hero = Some(hero),
                Ok(other) => tracing::warn!("QUEST_HERO={other} is not playable, ignoring"),
                Err(error) => tracing::warn!("QUEST_HERO ignored: {error}"),
            }
        }

        config.seed = parse(&lookup, "QUEST_SEED");

        if let Some(rate) = parse::<u32>(&lookup, "QUEST_TICK_RATE") {
            config.tick_rate = rate.clamp(1, GameConfig::MAX_TICK_RATE);
        }

        if let Some(capacity) = parse::<usize>(&lookup, "QUEST_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }

        config
    }

    /// Wall-clock time between two logical frames.
    pub fn frame_interval(&self) -> Duration {
        let rate = self.tick_rate.clamp(1, GameConfig::MAX_TICK_RATE);
        Duration::from_secs(1) / rate
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            game_config: self.game.clone(),
            event_buffer_size: self.event_buffer,
            seed: self.seed,
            ..RuntimeConfig::default()
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn load(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = load(&[]);
        assert_eq!(config.hero, None);
        assert_eq!(config.seed, None);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.event_buffer, 100);
    }

    #[test]
    fn reads_hero_and_seed() {
        let config = load(&[("QUEST_HERO", "Archer"), ("QUEST_SEED", "42")]);
        assert_eq!(config.hero, Some(Archetype::Archer));
        assert_eq!(config.runtime_config().seed, Some(42));
    }

    #[test]
    fn enemies_and_garbage_are_not_heroes() {
        assert_eq!(load(&[("QUEST_HERO", "ghost")]).hero, None);
        assert_eq!(load(&[("QUEST_HERO", "wizard")]).hero, None);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejected_hero_is_reported_to_installed_subscriber() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            load(&[("QUEST_HERO", "slime")])
        });

        assert_eq!(config.hero, None);
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("QUEST_HERO=slime is not playable"));
    }

    #[test]
    fn tick_rate_is_clamped() {
        assert_eq!(load(&[("QUEST_TICK_RATE", "500")]).tick_rate, 144);
        assert_eq!(load(&[("QUEST_TICK_RATE", "0")]).tick_rate, 1);
        assert_eq!(
            load(&[("QUEST_TICK_RATE", "100")]).frame_interval(),
            Duration::from_millis(10)
        );
    }
}
