pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageTokenStore;

pub use config::AppConfig;
pub use session::{AuthTokens, Session, TokenStore};
