use std::fmt;

#[derive(Debug)]
pub enum ListError {
    Client(campus_client::ClientError),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Client(e) => write!(f, "client error: {e}"),
        }
    }
}

impl std::error::Error for ListError {}

impl From<campus_client::ClientError> for ListError {
    fn from(e: campus_client::ClientError) -> Self {
        ListError::Client(e)
    }
}
