use thiserror::Error;

/// Errors surfaced by configuration and scene actions.
///
/// None of these are reachable from the per-frame update; a running scene
/// never fails, it only degrades visually.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("photo slot {index} out of range ({count} slots)")]
    SlotOutOfRange { index: usize, count: usize },

    #[error("invalid value {value:?} for query parameter `{key}`")]
    InvalidQuery { key: String, value: String },

    #[error("{0} count must be greater than zero")]
    EmptyGroup(&'static str),

    #[error("ornament count {count} exceeds the maximum of {max}")]
    TooManyOrnaments { count: usize, max: usize },

    #[error("smoothing constant `{name}` = {value} must lie strictly between 0 and 1")]
    SmoothingOutOfRange { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
