//! In-memory clip registry.
//!
//! Stands in for the browser's object-URL table: every assembled clip gets a
//! `blob:` identifier that stays live until its [`ClipHandle`] is released.

use crate::{
    media::{ClipAssembler, ClipChunk, ClipHandle, ClipInfo, ReleaseGuard, ResourceId},
    overlay::Geometry,
};

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use tracing::{debug, error, warn};
use uuid::Uuid;

const RESOURCE_SCHEME: &str = "blob:swing-review/";

#[derive(Debug, Default)]
struct Registry {
    clips: HashMap<ResourceId, Arc<[u8]>>,
    assembled: usize,
    revoked: usize,
}

/// Shared, cloneable in-memory [`ClipAssembler`].
#[derive(Debug, Clone, Default)]
pub struct MemoryClipStore {
    registry: Arc<Mutex<Registry>>,
}

impl MemoryClipStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clips whose identifier has not been revoked.
    pub fn live_count(&self) -> usize {
        lock(&self.registry).clips.len()
    }

    /// Number of clips assembled so far.
    pub fn assembled_count(&self) -> usize {
        lock(&self.registry).assembled
    }

    /// Number of identifiers revoked so far.
    pub fn revoked_count(&self) -> usize {
        lock(&self.registry).revoked
    }

    /// Payload behind a live identifier.
    pub fn bytes(&self, id: &ResourceId) -> Option<Arc<[u8]>> {
        lock(&self.registry).clips.get(id).cloned()
    }
}

impl ClipAssembler for MemoryClipStore {
    fn assemble(
        &mut self,
        chunks: Vec<ClipChunk>,
        mime_type: &str,
        geometry: Geometry,
    ) -> ClipHandle {
        let chunk_count = chunks.len();
        let byte_len = chunks.iter().map(ClipChunk::len).sum();

        let mut payload = Vec::with_capacity(byte_len);
        for chunk in chunks {
            payload.extend_from_slice(chunk.as_bytes());
        }

        let resource_id = ResourceId::new(format!("{RESOURCE_SCHEME}{}", Uuid::new_v4()));

        {
            let mut registry = lock(&self.registry);
            registry.clips.insert(resource_id.clone(), payload.into());
            registry.assembled += 1;
        }

        debug!(%resource_id, chunk_count, byte_len, "Clip registered");

        let registry = Arc::clone(&self.registry);
        let revoke_id = resource_id.clone();
        let guard = ReleaseGuard::new(move || {
            let mut registry = lock(&registry);
            if registry.clips.remove(&revoke_id).is_some() {
                registry.revoked += 1;
                debug!(resource_id = %revoke_id, "Clip revoked");
            } else {
                warn!(resource_id = %revoke_id, "Clip identifier was already gone");
            }
        });

        ClipHandle::new(
            ClipInfo {
                resource_id,
                mime_type: mime_type.to_string(),
                byte_len,
                chunk_count,
                geometry,
            },
            guard,
        )
    }
}

// The registry stays consistent even if a holder panicked mid-update.
fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|e| {
        error!("Clip registry lock poisoned, recovering: {}", e);
        e.into_inner()
    })
}
