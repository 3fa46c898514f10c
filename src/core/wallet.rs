//! Wallet key material with network-abstract address derivation.

use crate::types::bytes::Bytes;

/// Key material for an account: a public key and, for wallets that can
/// sign, the matching private key.
///
/// The scaffolding stores keys as opaque bytes — curve choice, signing and
/// encryption are network concerns. Address and key-hash derivation are
/// likewise left to an [`AddressScheme`] implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wallet {
    public_key: Bytes,
    private_key: Option<Bytes>,
}

impl Wallet {
    /// A watch-only wallet holding just a public key.
    pub fn new(public_key: impl Into<Bytes>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: None,
        }
    }

    /// A signing wallet holding both halves of a key pair.
    pub fn with_private_key(public_key: impl Into<Bytes>, private_key: impl Into<Bytes>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: Some(private_key.into()),
        }
    }

    /// The public key bytes.
    pub fn public_key(&self) -> &Bytes {
        &self.public_key
    }

    /// The private key bytes, if this wallet can sign.
    pub fn private_key(&self) -> Option<&Bytes> {
        self.private_key.as_ref()
    }

    /// Lowercase hex rendering of the public key.
    pub fn public_key_hex(&self) -> String {
        self.public_key.to_string()
    }
}

/// Network-specific derivation of an account address from wallet keys.
///
/// Networks typically hash the public key and keep a fixed-size suffix;
/// the scaffolding makes no assumption beyond bytes in, bytes out.
pub trait AddressScheme {
    fn address(&self, wallet: &Wallet) -> Bytes;
}
