pub mod config;
pub mod preferences;

pub use config::{ConfigError, DashboardConfig};
pub use preferences::{MemoryPreferences, PreferenceStore, Preferences};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use preferences::LocalStorage;
