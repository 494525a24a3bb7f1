//! API request handlers for the clientes resource

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::models::{Cliente, ClienteDraft};
use crate::service::{ClienteService, ServiceError};

/// Shared application state
pub struct AppState {
    pub service: Box<dyn ClienteService>,
}

/// Error responses the API can produce
#[derive(Debug)]
pub enum ApiError {
    /// 404 with a `mensaje` envelope
    NotFound { mensaje: String },

    /// 400 with one message per invalid field
    Validation { errors: Vec<String> },

    /// 500 with a `mensaje` and the storage-level cause
    Storage { mensaje: String, error: String },
}

impl ApiError {
    fn storage(mensaje: &str, err: ServiceError) -> Self {
        ApiError::Storage {
            mensaje: mensaje.to_string(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { mensaje } => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "mensaje": mensaje })),
            )
                .into_response(),
            ApiError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Storage { mensaje, error } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "mensaje": mensaje, "error": error })),
            )
                .into_response(),
        }
    }
}

/// Success envelope for create and update operations
#[derive(Debug, Serialize)]
pub struct ClienteEnvelope {
    pub mensaje: String,
    pub cliente: Cliente,
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "clientes-api"
    }))
}

/// List every cliente
pub async fn list_clientes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Cliente>>, ApiError> {
    info!("Listing clientes");

    let clientes = state
        .service
        .find_all()
        .await
        .map_err(|e| ApiError::storage("Error al realizar la consulta en la base de datos", e))?;

    Ok(Json(clientes))
}

/// Get a single cliente by id
pub async fn get_cliente_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Cliente>, ApiError> {
    info!("Fetching cliente {}", id);

    let cliente = state
        .service
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::storage("Error al realizar la consulta en la base de datos", e))?;

    match cliente {
        Some(cliente) => Ok(Json(cliente)),
        None => Err(ApiError::NotFound {
            mensaje: format!("El cliente ID: {} no existe en la base de datos!", id),
        }),
    }
}

/// Create a new cliente
pub async fn create_cliente_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ClienteDraft>,
) -> Result<(StatusCode, Json<ClienteEnvelope>), ApiError> {
    info!("Creating cliente with email: {}", payload.email);

    validate_payload(&payload)?;

    let cliente = state
        .service
        .save(None, &payload)
        .await
        .map_err(|e| ApiError::storage("Error al realizar el insert en la base de datos", e))?;

    Ok((
        StatusCode::CREATED,
        Json(ClienteEnvelope {
            mensaje: "El cliente ha sido creado con éxito!".to_string(),
            cliente,
        }),
    ))
}

/// Update an existing cliente
pub async fn update_cliente_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ClienteDraft>,
) -> Result<Json<ClienteEnvelope>, ApiError> {
    info!("Updating cliente {}", id);

    validate_payload(&payload)?;

    let existing = state
        .service
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::storage("Error al realizar la consulta en la base de datos", e))?;

    let existing = match existing {
        Some(cliente) => cliente,
        None => {
            return Err(ApiError::NotFound {
                mensaje: format!(
                    "Error: no se pudo editar, el cliente ID: {} no existe en la base de datos!",
                    id
                ),
            })
        }
    };

    // A payload without a creation date keeps the date of the stored record.
    let mut draft = payload;
    if draft.create_at.is_none() {
        draft.create_at = Some(existing.create_at);
    }

    let cliente = state
        .service
        .save(Some(id), &draft)
        .await
        .map_err(|e| ApiError::storage("Error al actualizar el cliente en la base de datos", e))?;

    Ok(Json(ClienteEnvelope {
        mensaje: "El cliente ha sido actualizado con éxito!".to_string(),
        cliente,
    }))
}

/// Delete a cliente by id. Deleting an id that is already gone succeeds.
pub async fn delete_cliente_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting cliente {}", id);

    state
        .service
        .delete(id)
        .await
        .map_err(|e| ApiError::storage("Error al eliminar el cliente de la base de datos", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Check the payload constraints, collecting one message per invalid field
/// in field declaration order.
fn validate_payload(payload: &ClienteDraft) -> Result<(), ApiError> {
    if let Err(validation_errors) = payload.validate() {
        let field_errors = validation_errors.field_errors();

        let mut errors = Vec::new();
        for field in ["nombre", "apellido", "email"] {
            if let Some(errs) = field_errors.get(field) {
                for err in errs.iter() {
                    let detail = err.message.as_deref().unwrap_or("no es válido");
                    errors.push(format!("El campo '{}' {}", field, detail));
                }
            }
        }

        return Err(ApiError::Validation { errors });
    }

    Ok(())
}
