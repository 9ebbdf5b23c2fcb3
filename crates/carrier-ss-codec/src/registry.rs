//! Per-carrier schema registry.
//!
//! Schemas are registered once per carrier identity (loaded from that
//! carrier's definition document) and read many times; lookups fall back
//! to the default schema when no carrier-specific one exists.

use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashMap;
use tracing::info;

use crate::codec::Codec;
use crate::schema::Schema;

/// Carrier id -> schema map plus the default (carrier-independent) schema.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: DashMap<u32, Arc<Schema>>,
    fallback: RwLock<Option<Arc<Schema>>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the schema for one carrier id, replacing any previous one.
    pub fn register(&self, carrier_id: u32, schema: Schema) -> Arc<Schema> {
        let schema = Arc::new(schema);
        self.schemas.insert(carrier_id, Arc::clone(&schema));
        info!(carrier_id, "registered carrier schema");
        schema
    }

    /// Register the default schema used when a carrier id has no entry.
    pub fn register_default(&self, schema: Schema) -> Arc<Schema> {
        let schema = Arc::new(schema);
        // The guarded sections never panic; recover a poisoned guard
        // rather than dropping the registration.
        let mut fallback = self
            .fallback
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *fallback = Some(Arc::clone(&schema));
        info!("registered default carrier schema");
        schema
    }

    /// The carrier-specific schema, else the default, else `None`.
    pub fn schema_for(&self, carrier_id: u32) -> Option<Arc<Schema>> {
        if let Some(entry) = self.schemas.get(&carrier_id) {
            return Some(Arc::clone(entry.value()));
        }
        self.fallback
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A codec over the schema that `schema_for` resolves.
    pub fn codec_for(&self, carrier_id: u32) -> Option<Codec> {
        self.schema_for(carrier_id).map(Codec::new)
    }

    pub fn contains(&self, carrier_id: u32) -> bool {
        self.schemas.contains_key(&carrier_id)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
