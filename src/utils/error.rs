use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdekError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to calculate delivery price (HTTP {status})")]
    CalculationFailed { status: u16 },

    #[error("Invalid tariff response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CdekError>;
