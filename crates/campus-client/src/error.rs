use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    Transport(ureq::Error),
    Status(u16),
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "transport error: {e}"),
            ClientError::Status(code) => write!(f, "server returned status {code}"),
            ClientError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    pub fn status_code(&self) -> Option<http::StatusCode> {
        match self {
            ClientError::Status(code) => http::StatusCode::from_u16(*code).ok(),
            _ => None,
        }
    }
}

impl From<ureq::Error> for ClientError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => ClientError::Status(code),
            other => ClientError::Transport(other),
        }
    }
}
