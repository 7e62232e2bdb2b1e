//! gallery-store: Storage layer for the Gallery API
//!
//! This crate provides:
//! - PostgreSQL storage for painting records
//! - Migration management
//! - Type-safe database operations via sqlx
//!
//! # Architecture
//!
//! Paintings are documents: a required `name` plus an opaque JSONB
//! attribute bag the rest of the system never inspects. Every failure
//! mode a caller needs to distinguish is a typed [`StoreError`] variant;
//! in particular an unparseable identifier is `InvalidIdentifier`, never
//! a message to be string-matched.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gallery_store::{NewPainting, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let painting = NewPainting::new("Starry Night".to_string(), Default::default());
//! let row = store.insert_painting(&painting).await?;
//!
//! let fetched = store.get_painting(row.id).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{NewPainting, PaintingRow};
pub use store::{parse_painting_id, Store, StoreConfig};
