//! Local persistence and account registry

pub mod kv;
pub mod session;
pub mod history;
pub mod users;

pub use kv::KvStore;
pub use session::SessionManager;
pub use history::HistoryStore;
pub use users::UserRegistry;
