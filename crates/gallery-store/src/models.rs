//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for
//! sqlx queries. The attribute bag is kept as raw JSON so the store
//! never has to know which fields a painting carries beyond `name`.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `paintings` table.
#[derive(Debug, Clone, FromRow)]
pub struct PaintingRow {
    pub id: Uuid,
    pub name: String,
    /// Attribute document. Opaque to this layer; a JSON object for every
    /// well-formed row.
    pub attributes: Value,
    pub created: DateTime<Utc>,
}

impl PaintingRow {
    /// Whether the stored attribute document is a JSON object.
    pub fn is_well_formed(&self) -> bool {
        self.attributes.is_object()
    }
}

/// Input for inserting a new painting.
///
/// The identifier is assigned here, at creation time, so the caller can
/// return it without a second query.
#[derive(Debug, Clone)]
pub struct NewPainting {
    pub id: Uuid,
    pub name: String,
    /// Attribute fields beyond `name`, stored verbatim.
    pub attributes: Map<String, Value>,
}

impl NewPainting {
    /// Create a new painting with a freshly generated identifier.
    pub fn new(name: String, attributes: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            attributes,
        }
    }
}
