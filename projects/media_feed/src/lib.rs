//! Instagram media feed service
//!
//! - REST API endpoints in `endpoints/`
//! - Environment configuration in `config`
//! - Requires IG_TOKEN env var for Graph API access

pub mod config;
pub mod endpoints;
pub mod router;

pub use config::AppConfig;
pub use router::{router, AppState};
