use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use futures::future::join_all;
use tracing::{info, instrument};

use super::{
    context::CallContext,
    types::{CreatableQuery, RoomTypeResponse},
};
use crate::shared::{AppError, AppState};

/// Routes exposing the registered room types
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/room-types", get(list_room_types))
        .route("/room-types/creatable", get(list_creatable_room_types))
        .route("/room-types/:identifier", get(get_room_type))
        .with_state(state)
}

/// HTTP handler for listing all room types
///
/// GET /room-types
/// Returns room types sorted by display order
#[instrument(name = "list_room_types", skip(state))]
pub async fn list_room_types(State(state): State<AppState>) -> Json<Vec<RoomTypeResponse>> {
    let room_types: Vec<RoomTypeResponse> = state
        .registry
        .ordered()
        .into_iter()
        .map(RoomTypeResponse::from)
        .collect();

    info!(room_type_count = room_types.len(), "Room types listed");
    Json(room_types)
}

/// HTTP handler for a single room type
///
/// GET /room-types/:identifier
#[instrument(name = "get_room_type", skip(state))]
pub async fn get_room_type(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<RoomTypeResponse>, AppError> {
    let config = state
        .registry
        .get(&identifier)
        .ok_or_else(|| AppError::NotFound(format!("Room type '{}' not found", identifier)))?;

    Ok(Json(RoomTypeResponse::from(config)))
}

/// HTTP handler for the room types an actor may create
///
/// GET /room-types/creatable?actor_id=...
/// Returns identifiers in display order; empty without an actor
#[instrument(name = "list_creatable_room_types", skip(state))]
pub async fn list_creatable_room_types(
    State(state): State<AppState>,
    Query(query): Query<CreatableQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let ctx = CallContext {
        is_server: true,
        actor_id: query.actor_id,
    };

    let configs = state.registry.ordered();
    let checks = join_all(configs.iter().map(|config| config.can_be_created(&ctx))).await;

    let mut creatable = Vec::new();
    for (config, allowed) in configs.iter().zip(checks) {
        if allowed? {
            creatable.push(config.identifier().to_string());
        }
    }

    info!(actor_id = ?ctx.actor_id, creatable = ?creatable, "Creatable room types resolved");
    Ok(Json(creatable))
}
