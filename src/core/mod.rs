//! Abstract chain-type contracts.
//!
//! Networks implement these traits for their own block and transaction
//! layouts; the scaffolding contributes the cached-rendering and decoding
//! plumbing, never a concrete wire format.

pub mod block;
pub mod codec;
pub mod transaction;
pub mod wallet;
