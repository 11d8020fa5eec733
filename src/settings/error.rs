use thiserror::Error;

/// Errors raised while reading settings back from JSON or registering them.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A required key is absent from a setting object.
    #[error("Setting '{id}' is missing key \"{key}\"")]
    MissingKey { id: String, key: &'static str },

    /// A key is present but holds the wrong JSON type.
    #[error("Setting '{id}': key \"{key}\" must be a {expected}")]
    WrongType {
        id: String,
        key: &'static str,
        expected: &'static str,
    },

    /// Setting JSON was not an object.
    #[error("Expected a JSON object for setting '{0}'")]
    NotAnObject(String),

    /// Registry JSON was not an array of setting objects.
    #[error("Expected a JSON array of settings")]
    NotAnArray,

    /// Two settings with the same id were registered.
    #[error("Duplicate setting id: {0}")]
    DuplicateId(String),

    /// Text could not be parsed as JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
