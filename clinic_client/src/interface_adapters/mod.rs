// Interface adapters: REST client and session storage.

pub mod clients;
pub mod protocol;
pub mod storage;

pub use clients::ApiClient;
pub use storage::{FileSessionStore, InMemorySessionStore};
