//! Core serialization and tree primitives.
//!
//! This module contains the building blocks concrete networks assemble their
//! wire formats from:
//! - `Bytes`: reference-counted byte buffer shared across the crate
//! - `BufferReader` / `BufferWriter`: positional little-endian cursors
//! - `FieldTemplate`: declarative field concatenation
//! - `MerkleTree`: root computation over fixed-size leaves
//! - `BufferCache`: cache-or-compute slot for rendered buffers

pub mod bytes;
pub mod cache;
pub mod cursor;
pub mod merkle_tree;
pub mod template;
