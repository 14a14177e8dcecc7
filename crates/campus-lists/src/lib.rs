mod config;
mod debounce;
mod error;
mod service;
mod state;

pub use config::{ListConfig, SearchTarget};
pub use debounce::Debounce;
pub use error::ListError;
pub use service::ListService;
pub use state::{ListState, RequestToken};
