use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

#[derive(Error, Debug)]
pub enum RecipeApiError {
    #[error("Recipe API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Recipe API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse recipe API response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Why a `CHOOSE_RECIPE_<id>__SERVINGS_<n>` command could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("missing __SERVINGS_ separator")]
    MissingSeparator,

    #[error("missing recipe id")]
    MissingId,

    #[error("servings is not an integer: {0:?}")]
    InvalidServings(String),
}
