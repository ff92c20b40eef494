pub mod app;

pub use app::{parse_allowed_origins, AppConfig, StorageConfig};
