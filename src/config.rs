//! Playground configuration.
//!
//! Values come from three layers, later ones winning:
//! built-in defaults, a TOML file, then `PLAYGROUND_*` environment variables.
//!
//! ```toml
//! seed = 42
//! pace_ms = 0
//!
//! [strategy]
//! games = 101
//!
//! [abstract_factory]
//! kind = "table"
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::error::{PlaygroundError, Result};

pub const CONFIG_ENV: &str = "PLAYGROUND_CONFIG";
pub const SEED_ENV: &str = "PLAYGROUND_SEED";
pub const PACE_ENV: &str = "PLAYGROUND_PACE_MS";
pub const DEFAULT_CONFIG_FILE: &str = "playground.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    /// Fixes every random page to a reproducible run.
    pub seed: Option<u64>,
    /// Delay used where a page paces its output. Zero disables pacing.
    pub pace_ms: u64,
    pub strategy: StrategyConfig,
    pub observer: ObserverConfig,
    pub memento: MementoConfig,
    pub chain: ChainConfig,
    pub abstract_factory: AbstractFactoryConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyConfig {
    pub games: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    pub numbers: usize,
    /// Exclusive upper bound of generated numbers.
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MementoConfig {
    pub rounds: usize,
    pub starting_money: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    pub troubles: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AbstractFactoryConfig {
    pub kind: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pace_ms: 0,
            strategy: StrategyConfig::default(),
            observer: ObserverConfig::default(),
            memento: MementoConfig::default(),
            chain: ChainConfig::default(),
            abstract_factory: AbstractFactoryConfig::default(),
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self { games: 101 }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            numbers: 20,
            max: 50,
        }
    }
}

impl Default for MementoConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            starting_money: 100,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self { troubles: 500 }
    }
}

impl Default for AbstractFactoryConfig {
    fn default() -> Self {
        Self {
            kind: "list".to_string(),
        }
    }
}

impl PlaygroundConfig {
    /// Defaults with a fixed seed. Handy for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|var| std::env::var(var).ok())
    }

    /// Same as [`load`](Self::load) with an injectable variable lookup.
    ///
    /// An explicit `PLAYGROUND_CONFIG` must point at a readable file, while the
    /// default `playground.toml` is optional.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(&lookup)?;
        log::debug!("loaded config: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PlaygroundError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| PlaygroundError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = lookup(SEED_ENV) {
            self.seed = Some(parse_env(SEED_ENV, &raw)?);
        }
        if let Some(raw) = lookup(PACE_ENV) {
            self.pace_ms = parse_env(PACE_ENV, &raw)?;
        }
        Ok(())
    }

    /// A random generator for one page. Different `stream`s under the same
    /// seed give independent sequences.
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            None => StdRng::from_entropy(),
        }
    }

    pub fn pacer(&self) -> Pacer {
        Pacer::from_millis(self.pace_ms)
    }

    pub fn pause(&self) {
        self.pacer().pause();
    }
}

/// The one place pages sleep. Pages that pace from inside their participants
/// hand those participants a copy of the config's pacer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pacer(Duration);

impl Pacer {
    /// Never sleeps.
    pub const OFF: Pacer = Pacer(Duration::ZERO);

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.0
    }

    pub fn pause(&self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

fn parse_env<T: FromStr>(var: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| PlaygroundError::invalid_env(var, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.pace_ms, 0);
        assert_eq!(config.strategy.games, 101);
        assert_eq!(config.observer.numbers, 20);
        assert_eq!(config.observer.max, 50);
        assert_eq!(config.memento.rounds, 100);
        assert_eq!(config.chain.troubles, 500);
        assert_eq!(config.abstract_factory.kind, "list");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PlaygroundConfig = toml::from_str(
            r#"
            seed = 7
            [chain]
            troubles = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.chain.troubles, 10);
        assert_eq!(config.strategy.games, 101);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<PlaygroundConfig, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());

        let result: std::result::Result<PlaygroundConfig, _> =
            toml::from_str("[strategy]\nrounds = 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = PlaygroundConfig::default();
        config
            .apply_env(env_from(&[(SEED_ENV, "99"), (PACE_ENV, " 250 ")]))
            .unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.pacer().delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = PlaygroundConfig::default();
        let err = config
            .apply_env(env_from(&[(PACE_ENV, "soon")]))
            .unwrap_err();
        assert!(matches!(err, PlaygroundError::InvalidEnv { ref var, .. } if var == PACE_ENV));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "pace_ms = 5\n[abstract_factory]\nkind = \"table\"")
            .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let env = env_from(&[(CONFIG_ENV, path.as_str()), (SEED_ENV, "3")]);
        let config = PlaygroundConfig::load_with(env).unwrap();
        assert_eq!(config.pace_ms, 5);
        assert_eq!(config.abstract_factory.kind, "table");
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let env = env_from(&[(CONFIG_ENV, path.to_str().unwrap())]);
        let err = PlaygroundConfig::load_with(env).unwrap_err();
        assert!(matches!(err, PlaygroundError::ConfigRead { .. }));
    }

    #[test]
    fn test_bad_toml_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"not a number\"").unwrap();
        let err = PlaygroundConfig::from_file(file.path()).unwrap_err();
        match err {
            PlaygroundError::ConfigParse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    fn draw(mut rng: StdRng) -> Vec<u32> {
        (0..8).map(|_| rng.gen_range(0..100)).collect()
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = PlaygroundConfig::seeded(42);
        assert_eq!(draw(config.rng(1)), draw(config.rng(1)));
        assert_ne!(draw(config.rng(1)), draw(config.rng(2)));
    }

    #[test]
    fn test_pacer_follows_pace_ms() {
        assert_eq!(PlaygroundConfig::default().pacer(), Pacer::OFF);
        let config = PlaygroundConfig {
            pace_ms: 3,
            ..PlaygroundConfig::default()
        };
        assert_eq!(config.pacer().delay(), Duration::from_millis(3));

        let start = std::time::Instant::now();
        config.pause();
        assert!(start.elapsed() >= Duration::from_millis(3));
    }
}
