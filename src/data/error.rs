use thiserror::Error;

/// Why a required weather request could not produce data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider matched no location for the query.
    #[error("no location matched '{0}'")]
    NotFound(String),

    /// Network, DNS, timeout or non-success HTTP status.
    #[error("weather request failed: {0}")]
    Transport(String),

    /// A success response whose body did not have the expected shape.
    #[error("failed to decode weather payload: {0}")]
    Decode(String),
}

impl FetchError {
    /// The request URL carries the API key, so it never reaches the message.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url().to_string())
    }

    pub(crate) fn decode(err: reqwest::Error) -> Self {
        Self::Decode(err.without_url().to_string())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Message shown in the status line; `query` is what the user typed.
    #[must_use]
    pub fn user_message(&self, query: &str) -> String {
        match self {
            Self::NotFound(_) => {
                format!("City '{query}' not found. Please check the spelling and try again.")
            }
            Self::Transport(_) | Self::Decode(_) => {
                "Could not retrieve weather data. Please try again later.".to_string()
            }
        }
    }
}
