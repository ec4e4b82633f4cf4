//! Login, registration and logout flows against the auth service.

use crate::domain::model::{RegisterRequest, StoredSession};
use crate::domain::ports::{AuthApi, SessionStore};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use chrono::Utc;

pub async fn login(
    auth: &impl AuthApi,
    store: &impl SessionStore,
    username: &str,
    password: &str,
) -> Result<String> {
    validate_non_empty_string("username", username)?;
    validate_non_empty_string("password", password)?;

    let jwt = auth.login(username, password).await?;
    store.save(&StoredSession {
        token: jwt.token,
        username: username.to_string(),
        saved_at: Utc::now(),
    })?;

    tracing::info!("signed in as {}", username);
    Ok(format!("Signed in as {}.", username))
}

pub async fn register(auth: &impl AuthApi, request: RegisterRequest) -> Result<String> {
    validate_non_empty_string("username", &request.username)?;
    validate_non_empty_string("email", &request.email)?;
    validate_non_empty_string("password", &request.password)?;
    validate_non_empty_string("access_code", &request.access_code)?;

    auth.register(&request).await?;
    Ok("Account created successfully. You can now sign in.".to_string())
}

pub fn logout(store: &impl SessionStore) -> Result<String> {
    store.clear()?;
    tracing::info!("session cleared");
    Ok("Signed out.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::JwtResponse;
    use crate::utils::error::ParkingError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubAuth;

    #[async_trait]
    impl AuthApi for StubAuth {
        async fn login(&self, _username: &str, _password: &str) -> Result<JwtResponse> {
            Ok(JwtResponse {
                token: "jwt-token".to_string(),
                token_type: "Bearer".to_string(),
            })
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        session: Mutex<Option<StoredSession>>,
    }

    impl SessionStore for MemoryStore {
        fn load(&self) -> Result<Option<StoredSession>> {
            Ok(self.session.lock().unwrap().clone())
        }

        fn save(&self, session: &StoredSession) -> Result<()> {
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let store = MemoryStore::default();
        let message = login(&StubAuth, &store, "admin", "secret").await.unwrap();

        assert_eq!(message, "Signed in as admin.");
        let session = store.load().unwrap().unwrap();
        assert_eq!(session.token, "jwt-token");
        assert_eq!(session.username, "admin");
    }

    #[tokio::test]
    async fn test_login_rejects_blank_credentials() {
        let store = MemoryStore::default();
        let err = login(&StubAuth, &store, "  ", "secret").await.unwrap_err();
        assert!(matches!(err, ParkingError::InvalidConfigValueError { .. }));
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let request = RegisterRequest {
            username: "newuser".to_string(),
            email: String::new(),
            password: "secret".to_string(),
            access_code: "CODE-1".to_string(),
        };
        let err = register(&StubAuth, request).await.unwrap_err();
        assert!(matches!(err, ParkingError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let store = MemoryStore::default();
        login(&StubAuth, &store, "admin", "secret").await.unwrap();

        let message = logout(&store).unwrap();
        assert_eq!(message, "Signed out.");
        assert!(store.load().unwrap().is_none());
    }
}
