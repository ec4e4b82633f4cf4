pub mod auth_flow;
pub mod dashboard;
pub mod gate;
pub mod vehicles;

use crate::core::client::CoreClient;
use crate::domain::ports::{ConfigProvider, SessionStore};
use crate::utils::error::{ParkingError, Result};

/// Build a core client from the stored session. The protected views
/// (dashboard, slots, entry, exit) require a signed-in session, mirroring
/// the web UI's isAuthenticated() guard; without one this fails with a
/// sign-in hint before any backend call is made.
pub fn signed_in_core(
    config: &impl ConfigProvider,
    store: &impl SessionStore,
) -> Result<CoreClient> {
    let session = store.load()?.ok_or(ParkingError::NotAuthenticated)?;
    Ok(CoreClient::new(config.core_url(), Some(session.token)))
}
