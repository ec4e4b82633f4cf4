pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, Command, FileConfig};
pub use crate::core::auth::AuthClient;
pub use crate::core::client::CoreClient;
pub use crate::core::session::FileSessionStore;
pub use crate::utils::error::{ParkingError, Result};
