mod config;
mod id;
mod video;

#[cfg(feature = "http")]
pub mod http;

pub use config::{Config, ConfigError, Credentials, HttpConfig, StaticAsset};
pub use id::IdGenerator;
pub use video::{StoreError, Video, VideoInput, VideoStore};
