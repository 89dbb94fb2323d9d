use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use tree_core::SceneConfig;

/// Driver settings, overridable from the environment.
#[derive(Clone, Debug)]
pub struct Settings {
    pub seed: u64,
    pub seconds: f32,
    pub config: SceneConfig,
}

fn var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{name}={raw:?} is not a valid value")),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {name}")),
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let mut config = SceneConfig::default();
        if let Some(n) = var("TREE_PARTICLES")? {
            config.particle_count = n;
        }
        if let Some(n) = var("TREE_SNOW_COUNT")? {
            config.snow_count = n;
        }
        if let Some(t) = var("TREE_OPEN_THRESHOLD")? {
            config.open_threshold = t;
        }
        config
            .validate()
            .context("scene configuration from environment")?;
        Ok(Self {
            seed: var("TREE_SEED")?.unwrap_or(42),
            seconds: var("TREE_SECONDS")?.unwrap_or(8.0_f32).max(0.0),
            config,
        })
    }
}
