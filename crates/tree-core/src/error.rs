use thiserror::Error;

/// Rejections raised while building a [`crate::SceneConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid color `{0}`: expected #rrggbb")]
    InvalidColor(String),
    #[error("{name} must be at least {min}, got {value}")]
    InvalidCount {
        name: &'static str,
        min: usize,
        value: usize,
    },
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("open-hand threshold must lie in (0, 1), got {0}")]
    InvalidThreshold(f32),
}

/// Failures reported by the external camera while starting a tracker session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("camera unavailable: {0}")]
    Unavailable(String),
}
