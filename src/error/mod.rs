/// Errors in midonet-client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Field not set: {0}")]
    MissingField(&'static str),
    #[error("Fail to encode structs: {0}")]
    Encode(String),
    #[error("Fail to decode payload: {0}")]
    Decode(String),
    #[error("Configure: {0}")]
    Config(String),
    #[error("Unsupported media type: {0}")]
    MediaType(String),
    #[error("Transport: {0}")]
    Transport(String),
    /// The API answered with a status outside of 2xx.
    #[error("HTTP status {status}: {body}")]
    Status {
        status: hyper::StatusCode,
        body: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Format an error message as a `Transport` error
#[macro_export]
macro_rules! err_transport {
    ($($fmt_args:tt)*) => {
        $crate::error::Error::Transport(
            format!(
                "{} ({}:{})",
                format_args!($($fmt_args)*),
                module_path!(),
                line!(),
            )
        )
    };
}
