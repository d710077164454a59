/// Errors produced while building requests, talking to the API, or
/// interpreting its responses.
///
/// The `newswire` binary converts these into `color_eyre` reports at its
/// single entry point; library callers can match on the variants directly.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API key is missing before any request was attempted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A malformed enum value, a malformed date string, or a missing
    /// required field for the chosen command.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection failure or a non-success HTTP status.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body is not valid JSON or does not match the shape the
    /// endpoint promises.
    #[error("Response error: {0}")]
    Response(String),

    /// A well-formed error document returned by the API itself.
    #[error("API error [{code}]: {message}")]
    Upstream { code: String, message: String },
}
