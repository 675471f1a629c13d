use crate::{media::ReleaseGuard, overlay::Geometry};

use std::fmt;

/// One opaque fragment of recorded data, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipChunk(Vec<u8>);

impl ClipChunk {
    /// Wraps raw recorder output.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Chunk payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the chunk carries no data.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Takes the payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Revocable identifier of host-managed clip memory (a `blob:` URL in a browser).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wraps a host identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Description of a clip handed back by a [`ClipAssembler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipInfo {
    /// Backing identifier to revoke when the clip is released.
    pub resource_id: ResourceId,
    /// Container type.
    pub mime_type: String,
    /// Total payload size.
    pub byte_len: usize,
    /// Number of chunks the clip was assembled from.
    pub chunk_count: usize,
    /// Intrinsic frame size.
    pub geometry: Geometry,
}

/// A playable, looping clip owned by the session.
///
/// The backing identifier is revoked exactly once: on [`release`](Self::release)
/// or, failing that, on drop.
#[derive(Debug)]
pub struct ClipHandle {
    info: ClipInfo,
    looping: bool,
    guard: ReleaseGuard,
}

impl ClipHandle {
    /// Binds clip metadata to the action that revokes its identifier.
    pub fn new(info: ClipInfo, guard: ReleaseGuard) -> Self {
        Self {
            info,
            looping: true,
            guard,
        }
    }

    /// Backing identifier.
    pub fn resource_id(&self) -> &ResourceId {
        &self.info.resource_id
    }

    /// Container type.
    pub fn mime_type(&self) -> &str {
        &self.info.mime_type
    }

    /// Total payload size.
    pub fn byte_len(&self) -> usize {
        self.info.byte_len
    }

    /// Number of chunks assembled.
    pub fn chunk_count(&self) -> usize {
        self.info.chunk_count
    }

    /// Intrinsic frame size.
    pub fn geometry(&self) -> Geometry {
        self.info.geometry
    }

    /// Whether playback restarts at the end.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Revokes the backing identifier now.
    pub fn release(self) {
        self.guard.release();
    }
}

/// Turns recorded chunks into a playable clip.
pub trait ClipAssembler {
    /// Concatenates `chunks` in order. Zero chunks yields a valid empty clip.
    fn assemble(&mut self, chunks: Vec<ClipChunk>, mime_type: &str, geometry: Geometry)
    -> ClipHandle;
}
