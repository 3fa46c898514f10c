//! Abstract transaction contract.

use crate::core::codec::BufferCodec;

/// Scaffolding contract for network-specific transaction types.
///
/// Carries no payload semantics of its own: signatures, fees and execution
/// rules belong to the implementing network. Like blocks, transactions get
/// their cached rendering and byte-level decoding from [`BufferCodec`].
pub trait Transaction: BufferCodec {}
