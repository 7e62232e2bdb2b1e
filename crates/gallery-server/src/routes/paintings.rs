//! Painting resource routes for the Gallery API.
//!
//! This module implements the painting-related HTTP endpoints:
//! - POST /paintings - Create a painting
//! - GET /paintings/{id} - Fetch a single painting
//! - GET /paintings/ - Fetch the full collection
//! - DELETE /paintings/{id} - Remove a painting
//!
//! Status contract: creates answer 200, reads answer 202 (kept for wire
//! compatibility with existing clients), deletes answer 204. A missing or
//! unparseable identifier is 404; a create body without a usable `name`
//! is 400 and never reaches the store; everything unclassified is 500
//! with no body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use gallery_store::{parse_painting_id, NewPainting, PaintingRow, StoreError};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Helper Functions
// ============================================================================

/// Extract a usable `name` from the request body.
///
/// The name must be present, a string, and non-empty after trimming.
fn required_name(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => Some(name.clone()),
        _ => None,
    }
}

/// Serialize a row into its API shape.
///
/// The attribute document is flattened into the record object alongside
/// `id`, `name`, and `created`.
fn painting_body(row: PaintingRow) -> Value {
    let PaintingRow {
        id,
        name,
        attributes,
        created,
    } = row;

    let mut doc = match attributes {
        Value::Object(map) => map,
        // Only malformed rows carry a non-object document; a read still
        // answers with the typed fields.
        _ => Map::new(),
    };
    doc.insert("id".to_string(), Value::String(id.to_string()));
    doc.insert("name".to_string(), Value::String(name));
    doc.insert("created".to_string(), Value::String(created.to_rfc3339()));

    Value::Object(doc)
}

/// Parse a raw path segment, logging the reject the way a read expects.
fn parse_id(raw: &str) -> ApiResult<Uuid> {
    parse_painting_id(raw).map_err(|e| {
        tracing::debug!(raw = %raw, "Could not parse painting identifier");
        ApiError::Store(e)
    })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /paintings - Create a painting.
///
/// The body is an arbitrary JSON object; only `name` is inspected here,
/// the rest is stored verbatim as the painting's attribute document.
///
/// # Response
///
/// - 200 OK: the created record, including its assigned identifier
/// - 400 Bad Request: body is not an object or lacks a non-empty `name`
///   (no persistence call is made)
/// - 500 Internal Server Error: store failure
async fn create_painting(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    tracing::info!("Processing create request");

    let Value::Object(mut fields) = body else {
        tracing::info!("Create rejected: body is not a JSON object");
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    };

    let Some(name) = required_name(&fields) else {
        tracing::info!("Create rejected: missing or empty name");
        return Err(ApiError::BadRequest(
            "painting name is required".to_string(),
        ));
    };
    fields.remove("name");

    let new_painting = NewPainting::new(name, fields);
    let row = state
        .store()
        .insert_painting(&new_painting)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create painting");
            ApiError::Store(e)
        })?;

    tracing::info!(painting_id = %row.id, name = %row.name, "Painting created");

    Ok(Json(painting_body(row)))
}

/// GET /paintings/{id} - Fetch a single painting.
///
/// # Response
///
/// - 202 Accepted: the record
/// - 404 Not Found: no such record, or the identifier did not parse
/// - 500 Internal Server Error: store failure
async fn get_painting(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    tracing::info!("Processing read request");

    let id = parse_id(&raw_id)?;

    let row = state.store().get_painting(id).await.map_err(|e| {
        match &e {
            StoreError::PaintingNotFound(_) => {
                tracing::info!(painting_id = %id, "Painting not found");
            }
            other => {
                tracing::error!(error = %other, "Failed to fetch painting");
            }
        }
        ApiError::Store(e)
    })?;

    Ok((StatusCode::ACCEPTED, Json(painting_body(row))))
}

/// GET /paintings/ - Fetch the full collection.
///
/// # Response
///
/// - 202 Accepted: JSON array of records, empty when the collection is empty
/// - 500 Internal Server Error: store failure
async fn list_paintings(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Vec<Value>>)> {
    tracing::info!("Processing read-all request");

    let rows = state.store().list_paintings().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list paintings");
        ApiError::Store(e)
    })?;

    tracing::info!(count = rows.len(), "Listed paintings");

    let paintings = rows.into_iter().map(painting_body).collect();
    Ok((StatusCode::ACCEPTED, Json(paintings)))
}

/// DELETE /paintings/{id} - Remove a painting.
///
/// The store removes atomically with a single find-and-remove. Absence is
/// checked before record validation, so a missing painting is always 404.
///
/// # Response
///
/// - 204 No Content: removed
/// - 400 Bad Request: the removed record's attribute document was malformed
/// - 404 Not Found: no such record, or the identifier did not parse
/// - 500 Internal Server Error: store failure
async fn delete_painting(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    tracing::info!("Processing delete request");

    let id = parse_id(&raw_id)?;

    let row = state.store().remove_painting(id).await.map_err(|e| {
        match &e {
            StoreError::PaintingNotFound(_) => {
                tracing::info!(painting_id = %id, "Painting not found");
            }
            StoreError::MalformedRecord(bad) => {
                tracing::warn!(painting_id = %bad, "Removed record was malformed");
            }
            other => {
                tracing::error!(error = %other, "Failed to delete painting");
            }
        }
        ApiError::Store(e)
    })?;

    tracing::info!(painting_id = %row.id, "Painting deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build painting routes.
///
/// The trailing-slash form of the collection path is registered
/// explicitly; axum does not redirect between the two.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/paintings", get(list_paintings).post(create_painting))
        .route("/paintings/", get(list_paintings))
        .route(
            "/paintings/{id}",
            get(get_painting).delete(delete_painting),
        )
}

// ============================================================================
// Tests
// ============================================================================
