//! Service bootstrap: telemetry, module lifecycle, and the HTTP server.

use anyhow::Context;
use axum::Router;
use bookstore_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules;

/// Registry with every service module registered
pub fn build_registry(settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, settings);
    registry
}

/// Fully routed application, without binding a socket
pub fn build_app(settings: &Settings) -> Router {
    let registry = build_registry(settings);
    bookstore_http::build_router(&registry, settings)
}

/// Run the service until shutdown.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    bookstore_telemetry::init(&settings.telemetry)
        .with_context(|| "failed to initialize telemetry")?;

    tracing::info!(
        env = ?settings.environment,
        bind = %settings.bind_address(),
        seed_catalog = settings.books.seed_catalog,
        "bookstore bootstrap starting"
    );

    let registry = build_registry(&settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    tracing::info!(
        modules = registry.module_count(),
        "bookstore bootstrap complete"
    );

    let served = bookstore_http::start_server(&registry, &settings).await;

    // Modules are stopped even when the server exits with an error
    registry.stop_modules().await?;
    served
}
