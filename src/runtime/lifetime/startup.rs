use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::ServiceContext;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub services: ServiceContext,
}

/// 准备服务器启动的上下文
/// 包括 TLS 提供者、存储后端与服务协作者
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // reqwest 访问 Google 需要 rustls 的加密提供者
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    if config.auth.google_client_id.is_empty() {
        warn!("auth.google_client_id is not set, Google sign-in will reject every token");
    }
    if config.is_production() && config.jwt.secret == "change-me-in-production" {
        warn!("JWT secret is still the built-in default, set JWT_SECRET in production");
    }

    let services = ServiceContext::from_config(storage.clone(), config)?;
    debug!(
        "Service context ready (timezone offset {} minutes)",
        config.app.timezone_offset_minutes
    );

    Ok(StartupContext { storage, services })
}
