use axum::serve;
use projects_media_feed::{
	config::ConfigError,
	endpoints::favicon::index::load_favicon,
	router, AppConfig, AppState,
};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Config: {source}")]
	Config {
		#[source]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	let dotenv = dotenvy::dotenv();

	let config = AppConfig::from_env()
		.map_err(|source| MainError::Config { source })?;

	utils_trace::init(&config.trace)
		.map_err(|source| MainError::TracingInit { source })?;

	match dotenv {
		Ok(path) => info!("Loaded environment from {}", path.display()),
		Err(err) => debug!("No .env file loaded: {err}"),
	}

	if config.access_token.is_empty() {
		warn!("IG_TOKEN is not set, Graph API requests will be rejected");
	}

	let addr = config
		.socket_addr()
		.map_err(|source| MainError::Config { source })?;

	let favicon = load_favicon(&config.favicon_path).await;
	let app = router(AppState::new(config, favicon));

	let listener = tokio::net::TcpListener::bind(addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!("Server running on addr: {}", addr);

	serve(listener, app)
		.await
		.map_err(|source| MainError::Serve { source })?;

	Ok(())
}
