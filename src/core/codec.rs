//! Shared binary codec contract for chain types.

use crate::types::bytes::Bytes;
use crate::types::cache::BufferCache;
use crate::types::cursor::BufferReader;

/// Errors surfaced by `from_reader` implementations.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before expected data was read.
    UnexpectedEof,
    /// Data does not represent a valid value for the target type.
    InvalidValue,
}

/// Cached binary rendering plus reader-based decoding.
///
/// Concrete network types supply the two codec hooks and embed a
/// [`BufferCache`]; the scaffolding contributes the cache-or-render getter
/// and the raw-bytes decoding entry point. The same contract serves blocks
/// and transactions — see [`Block`](crate::core::block::Block) and
/// [`Transaction`](crate::core::transaction::Transaction).
pub trait BufferCodec: Sized {
    /// Renders the full binary form of this value.
    fn to_buffer(&self) -> Bytes;

    /// Decodes a value from an already-positioned reader.
    fn from_reader(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError>;

    /// The instance's cache slot for the rendered buffer.
    fn buffer_cache(&self) -> &BufferCache;

    /// Returns the binary form, rendering and caching it on first call.
    fn buffer(&self) -> Bytes {
        self.buffer_cache().get_or_encode(|| self.to_buffer())
    }

    /// Decodes a value from raw bytes via a reader positioned at the start.
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = BufferReader::new(bytes);
        Self::from_reader(&mut reader)
    }
}
