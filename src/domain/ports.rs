use crate::domain::model::{
    EntryReceipt, ExitReceipt, JwtResponse, RegisterRequest, SessionRecord, Slot, StatsOverview,
    StoredSession,
};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<JwtResponse>;
    async fn register(&self, request: &RegisterRequest) -> Result<()>;
}

#[async_trait]
pub trait CoreApi: Send + Sync {
    async fn overview(&self) -> Result<StatsOverview>;
    async fn recent_sessions(&self, limit: usize) -> Result<Vec<SessionRecord>>;
    async fn slots(&self) -> Result<Vec<Slot>>;
    async fn register_entry(&self, plate: &str) -> Result<EntryReceipt>;
    async fn register_exit(&self, plate: &str) -> Result<ExitReceipt>;
}

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredSession>>;
    fn save(&self, session: &StoredSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn auth_url(&self) -> &str;
    fn core_url(&self) -> &str;
    fn session_file(&self) -> &str;
}
