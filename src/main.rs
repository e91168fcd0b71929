use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use moto_driver_backend::config::environment::EnvironmentConfig;
use moto_driver_backend::routes::create_app_router;
use moto_driver_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🏍️ Moto Driver Backend - Ledger de carreras");
    info!("============================================");
    info!("🌍 Entorno: {}", config.environment);

    if config.simulate_latency {
        info!("⏳ Latencia simulada activa");
    } else {
        warn!("⚡ Latencia simulada desactivada");
    }
    if config.cors_origins.is_empty() {
        warn!("🔓 CORS permisivo (sin CORS_ORIGINS)");
    }

    let addr = config.socket_addr()?;
    let app_state = AppState::with_mock_ledger(config);
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   POST /api/auth/login - Login del conductor");
    info!("   GET  /api/rides/available - Carreras disponibles");
    info!("   GET  /api/rides/nearby - Carrera cercana para notificar");
    info!("   GET  /api/rides/:id - Obtener carrera");
    info!("   POST /api/rides/:id/accept - Aceptar carrera");
    info!("   POST /api/rides/:id/validate-otp - Validar OTP del pasajero");
    info!("   POST /api/rides/:id/start - Iniciar carrera");
    info!("   GET  /api/clients/:id - Obtener cliente");
    info!("   GET  /api/driver - Conductor actual");
    info!("   PUT  /api/driver/status - Cambiar estado del conductor");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
