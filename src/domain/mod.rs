pub mod model;
pub mod ports;

pub use model::{
    EntryReceipt, ExitReceipt, JwtResponse, RegisterRequest, SessionRecord, Slot, StatsOverview,
    StoredSession,
};
pub use ports::{AuthApi, ConfigProvider, CoreApi, SessionStore};
