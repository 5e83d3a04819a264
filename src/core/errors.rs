use thiserror::Error;

/// Failure modes of the search and result-action paths.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Non-2xx HTTP status from the search or image endpoint
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },

    /// Error field present in an otherwise successful search payload
    #[error("API error: {0}")]
    Api(String),

    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Temp file write failures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Missing required preference: {0}")]
    MissingPreference(&'static str),
}

pub type PaletteResult<T> = std::result::Result<T, PaletteError>;

impl From<reqwest::Error> for PaletteError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            PaletteError::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            PaletteError::Transport {
                status: status.as_u16(),
            }
        } else {
            PaletteError::Network(error.to_string())
        }
    }
}

impl From<arboard::Error> for PaletteError {
    fn from(error: arboard::Error) -> Self {
        PaletteError::Clipboard(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_message_carries_status() {
        let error = PaletteError::Transport { status: 403 };
        assert_eq!(error.to_string(), "HTTP error! status: 403");
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn write_fails() -> PaletteResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }

        let error = write_fails().unwrap_err();
        assert!(matches!(error, PaletteError::Io(_)));
        assert!(error.to_string().contains("denied"));
    }

    #[test]
    fn test_missing_preference_names_the_field() {
        let error = PaletteError::MissingPreference("apiKey");
        assert_eq!(error.to_string(), "Missing required preference: apiKey");
    }
}
