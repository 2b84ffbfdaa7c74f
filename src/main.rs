use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;
use shipment_tracking::config::environment::EnvironmentConfig;
use shipment_tracking::database;
use shipment_tracking::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use shipment_tracking::routes::create_app_router;
use shipment_tracking::state::AppState;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("📦 Shipment Tracking - Gestor de registros de envíos");
    info!("====================================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    // CORS: orígenes explícitos cuando están configurados
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = create_app_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📦 Endpoints - Trackings:");
    info!("   GET    /trackings - Listar trackings activos (filtros: status, logisticsCompanyId, forwarderId)");
    info!("   POST   /trackings - Crear tracking");
    info!("   GET    /trackings/count - Conteo de trackings activos");
    info!("   GET    /trackings/archived - Listar trackings archivados");
    info!("   POST   /trackings/batch - Alta masiva de trackings");
    info!("   GET    /trackings/:id - Obtener tracking");
    info!("   PATCH  /trackings/:id - Actualizar tracking");
    info!("   DELETE /trackings/:id - Eliminar tracking");
    info!("   POST   /trackings/:id/archive - Archivar tracking");
    info!("   POST   /trackings/:id/unarchive - Desarchivar tracking");
    info!("🚚 Endpoints - Logistics Companies:");
    info!("   GET    /logistics-companies - Listar empresas logísticas");
    info!("   POST   /logistics-companies - Crear empresa logística");
    info!("   GET    /logistics-companies/:id - Obtener empresa logística");
    info!("   PATCH  /logistics-companies/:id - Actualizar empresa logística");
    info!("   DELETE /logistics-companies/:id - Eliminar empresa logística");
    info!("🏢 Endpoints - Forwarders:");
    info!("   GET    /forwarders - Listar forwarders");
    info!("   POST   /forwarders - Crear forwarder");
    info!("   GET    /forwarders/:id - Obtener forwarder");
    info!("   PATCH  /forwarders/:id - Actualizar forwarder");
    info!("   DELETE /forwarders/:id - Eliminar forwarder");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
