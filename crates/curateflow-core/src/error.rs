use thiserror::Error;

/// Message shown to the user for every failed generation, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate playlist. Please try again.";

#[derive(Error, Debug)]
pub enum CurateError {
    #[error("Missing API key: set {env_var} (or API_KEY) before generating")]
    Configuration { env_var: String },

    #[error("Backend request failed: {reason}")]
    Backend { reason: String },

    #[error("No response text received from the generation backend")]
    EmptyResponse,

    #[error("Failed to parse playlist JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The single error the client surfaces to its caller.
///
/// The underlying [`CurateError`] is logged at the client boundary and never
/// leaves it, so callers only ever see [`GENERATION_FAILED_MESSAGE`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", GENERATION_FAILED_MESSAGE)]
pub struct GenerationFailed;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Duration must be between {min} and {max} minutes, got {got}")]
    DurationOutOfRange { got: u32, min: u32, max: u32 },

    #[error("Duration must be a multiple of {step} minutes, got {got}")]
    DurationStep { got: u32, step: u32 },

    #[error("Unknown {kind}: {value}")]
    UnknownLabel { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CurateError>;
