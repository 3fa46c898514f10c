//! Abstract block contract.

use crate::core::codec::BufferCodec;

/// Scaffolding contract for network-specific block types.
///
/// A block is whatever a network says it is — header layout, consensus
/// commitments and validation rules all live in the implementing crate. The
/// scaffolding asks only that a block can render itself to bytes and decode
/// from a positioned reader; the cached rendering comes from
/// [`BufferCodec::buffer`].
pub trait Block: BufferCodec {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::DecodeError;
    use crate::types::bytes::Bytes;
    use crate::types::cache::BufferCache;
    use crate::types::cursor::BufferReader;
    use crate::types::merkle_tree::{DEFAULT_HASH_SIZE, MerkleTree};
    use crate::types::template::{FieldTemplate, TemplateField};
    use crate::utils::test_utils::utils::counting_leaf;

    /// Minimal concrete block exercising the full scaffolding path:
    /// template-driven rendering, merkle commitment, cached buffer.
    #[derive(Debug, PartialEq, Eq)]
    struct TestBlock {
        version: u32,
        height: u64,
        merkle_root: Bytes,
        cache: BufferCache,
    }

    impl TestBlock {
        fn new(version: u32, height: u64, tx_hashes: Vec<Bytes>) -> Self {
            Self {
                version,
                height,
                merkle_root: MerkleTree::sha3(tx_hashes).root().clone(),
                cache: BufferCache::new(),
            }
        }
    }

    impl BufferCodec for TestBlock {
        fn to_buffer(&self) -> Bytes {
            FieldTemplate::new(vec![
                TemplateField::u32(self.version),
                TemplateField::u64(self.height),
                TemplateField::raw(self.merkle_root.clone()),
            ])
            .render()
        }

        fn from_reader(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
            if reader.remaining() < 4 + 8 + DEFAULT_HASH_SIZE {
                return Err(DecodeError::UnexpectedEof);
            }
            Ok(TestBlock {
                version: reader.read_u32(),
                height: reader.read_u64(),
                merkle_root: Bytes::from(reader.read_bytes(DEFAULT_HASH_SIZE)),
                cache: BufferCache::new(),
            })
        }

        fn buffer_cache(&self) -> &BufferCache {
            &self.cache
        }
    }

    impl Block for TestBlock {}

    #[test]
    fn block_roundtrips_through_its_buffer() {
        let block = TestBlock::new(2, 4242, vec![counting_leaf(), counting_leaf()]);

        let decoded = TestBlock::from_bytes(&block.buffer()).expect("decode failed");
        assert_eq!(decoded, block);
    }

    #[test]
    fn buffer_layout_starts_with_little_endian_header_fields() {
        let block = TestBlock::new(1, 0x0102030405060708, vec![]);
        let buf = block.buffer();

        assert_eq!(buf.len(), 4 + 8 + DEFAULT_HASH_SIZE);
        assert_eq!(&buf[..4], &[1, 0, 0, 0]);
        assert_eq!(&buf[4..12], &[8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn empty_block_commits_to_the_zero_root() {
        let block = TestBlock::new(1, 0, vec![]);
        assert!(block.merkle_root.iter().all(|&b| b == 0));
    }

    #[test]
    fn truncated_input_is_rejected() {
        let block = TestBlock::new(1, 1, vec![counting_leaf()]);
        let buf = block.buffer();

        let result = TestBlock::from_bytes(&buf[..buf.len() - 1]);
        assert_eq!(result.unwrap_err(), DecodeError::UnexpectedEof);
    }
}
