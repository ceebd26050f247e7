use room_types::{
    authorization::InMemoryAuthorizationService,
    room::InMemoryRoomRepository,
    room_type::{builtin, router},
    settings::{InMemorySettingsStore, UI_USE_REAL_NAME},
    subscription::InMemorySubscriptionRepository,
    user::InMemoryUserRepository,
    AppConfig, AppState, RoomTypeDeps,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "room_types=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(?config, "Starting room type service");

    // In-memory collaborators; swap for real stores by implementing the traits
    let deps = RoomTypeDeps {
        settings: Arc::new(InMemorySettingsStore::with_values([(
            UI_USE_REAL_NAME,
            json!(config.use_real_name),
        )])),
        users: Arc::new(InMemoryUserRepository::new()),
        rooms: Arc::new(InMemoryRoomRepository::new()),
        subscriptions: Arc::new(InMemorySubscriptionRepository::new()),
        authorization: Arc::new(InMemoryAuthorizationService::new()),
    };

    let registry = builtin::default_registry(deps)?;
    let app_state = AppState::new(Arc::new(registry));

    let app = router(app_state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
