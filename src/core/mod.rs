pub mod auth;
pub mod client;
pub mod plate;
pub mod session;

pub use crate::domain::ports::{AuthApi, ConfigProvider, CoreApi, SessionStore};
pub use crate::utils::error::Result;
