//! Opaque identifier encoding
//!
//! Storage keys are sequential integers. Clients only ever see them through an
//! [`IdentifierCodec`], which turns a key into a short opaque string and back.
//! This hides the sequence; it is not an access-control mechanism, ownership
//! is still checked by the [`OwnershipGuard`](crate::core::guard::OwnershipGuard).

use crate::config::CodecConfig;
use crate::core::error::CodecError;
use sqids::Sqids;

/// Reversible mapping between storage keys and opaque strings
///
/// Implementations must be pure functions of their configuration: the same
/// codec is shared by every concurrent request.
pub trait IdentifierCodec: Send + Sync {
    /// Encode a key
    fn encode(&self, id: u64) -> Result<String, CodecError>;

    /// Decode a string previously produced by [`encode`](Self::encode)
    ///
    /// Returns `None` for anything that was not issued by this codec.
    fn decode(&self, value: &str) -> Option<u64>;
}

/// [`IdentifierCodec`] backed by the `sqids` algorithm
///
/// The configured alphabet acts as the shared secret: two deployments with
/// different alphabets produce unrelated strings for the same key.
#[derive(Debug)]
pub struct SqidsCodec {
    sqids: Sqids,
}

impl SqidsCodec {
    /// Build a codec from configuration
    pub fn from_config(config: &CodecConfig) -> Result<Self, CodecError> {
        let mut builder = Sqids::builder().min_length(config.min_length);
        if let Some(alphabet) = &config.alphabet {
            builder = builder.alphabet(alphabet.chars().collect());
        }

        let sqids = builder.build().map_err(|e| CodecError::Configuration {
            message: e.to_string(),
        })?;

        Ok(Self { sqids })
    }
}

impl IdentifierCodec for SqidsCodec {
    fn encode(&self, id: u64) -> Result<String, CodecError> {
        self.sqids.encode(&[id]).map_err(|e| CodecError::Encode {
            id,
            message: e.to_string(),
        })
    }

    fn decode(&self, value: &str) -> Option<u64> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let decoded = self.sqids.decode(value);
        let &[id] = decoded.as_slice() else {
            return None;
        };

        // Several strings can decode to the same key; only the one this codec
        // would issue is accepted.
        match self.encode(id) {
            Ok(canonical) if canonical == value => Some(id),
            _ => None,
        }
    }
}
