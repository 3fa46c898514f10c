//! Cache-or-compute slot for rendered buffers.

use crate::types::bytes::Bytes;
use std::sync::OnceLock;

/// Single-assignment cache for a rendered buffer.
///
/// Chain types embed one of these next to their fields so their binary form
/// is rendered at most once. Compares equal to every other cache so that
/// containing types can still derive `PartialEq`.
#[derive(Clone, Debug, Default)]
pub struct BufferCache {
    slot: OnceLock<Bytes>,
}

impl BufferCache {
    /// Creates an empty cache slot.
    pub fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Returns the cached buffer, rendering and storing it on first call.
    pub fn get_or_encode(&self, encode: impl FnOnce() -> Bytes) -> Bytes {
        self.slot.get_or_init(encode).clone()
    }

    /// Returns the cached buffer if one was already rendered.
    pub fn get(&self) -> Option<&Bytes> {
        self.slot.get()
    }
}

impl PartialEq for BufferCache {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for BufferCache {}
