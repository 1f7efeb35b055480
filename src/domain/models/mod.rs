pub mod config;
pub mod grant;
pub mod login;

pub use config::{Config, LoggingConfig, UpstreamConfig};
pub use grant::{AuthGrant, LeaseExtension, LeaseOptions};
pub use login::LoginRequest;
