pub mod commands;
pub mod config;
pub mod entities;
pub mod error;
pub mod host;
pub mod session;
pub mod utils;
pub mod view;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use session::Session;
