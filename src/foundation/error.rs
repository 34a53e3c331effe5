pub type RingclockResult<T> = Result<T, RingclockError>;

#[derive(thiserror::Error, Debug)]
pub enum RingclockError {
    #[error("clock unavailable: {0}")]
    ClockUnavailable(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RingclockError {
    pub fn clock_unavailable(msg: impl Into<String>) -> Self {
        Self::ClockUnavailable(msg.into())
    }

    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Errors after which the run loop must stop instead of skipping a frame.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ClockUnavailable(_) | Self::InvalidGeometry(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
