mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{default_config_path, load_or_create, write_default};
