use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    #[error("a simulation run is already in progress")]
    AlreadyRunning,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
