use crate::address::{SuiAddress, ID_LENGTH};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use blake2::{digest::consts::U32, Blake2b, Digest};
use ed25519_dalek::{
    Signer, SigningKey, VerifyingKey, KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH,
    SIGNATURE_LENGTH,
};
use std::fmt;
use thiserror::Error;

/// Signature scheme flag for Ed25519 in addresses and serialized signatures
pub const ED25519_FLAG: u8 = 0x00;

/// Intent prefix for signing `TransactionData`: scope, version, app id
pub const TRANSACTION_INTENT: [u8; 3] = [0, 0, 0];

/// Length of `flag || signature || public key`
pub const SERIALIZED_SIGNATURE_LENGTH: usize = 1 + SIGNATURE_LENGTH + PUBLIC_KEY_LENGTH;

type Blake2b256 = Blake2b<U32>;

/// Why a secret could not become a [`SuiKeypair`]
#[derive(Debug, Error)]
pub enum KeyError {
    /// Not hex
    #[error("Secret key is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Decoded to the wrong number of bytes
    #[error("Secret key must be 32 or 64 bytes, got {0}")]
    Length(usize),
    /// 64 byte export whose public half belongs to another key
    #[error("Public half of the keypair does not match its secret")]
    MismatchedPublicKey,
}

/// 32-byte BLAKE2b digest
pub fn blake2b256(data: &[u8]) -> [u8; ID_LENGTH] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Ed25519 keypair used to sign Sui transactions
pub struct SuiKeypair {
    signing_key: SigningKey,
}

impl SuiKeypair {
    /// Decode a hex secret, with or without `0x`.
    ///
    /// Accepts the 32 byte seed, or the legacy 64 byte `seed || public key` export, in which case
    /// the public half must match.
    pub fn from_hex(secret: &str) -> Result<Self, KeyError> {
        let secret = secret.trim();
        let digits = secret
            .strip_prefix("0x")
            .or_else(|| secret.strip_prefix("0X"))
            .unwrap_or(secret);
        let bytes = hex::decode(digits)?;
        Self::from_bytes(&bytes)
    }

    /// See [`SuiKeypair::from_hex`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        match bytes.len() {
            SECRET_KEY_LENGTH => {
                let mut seed = [0u8; SECRET_KEY_LENGTH];
                seed.copy_from_slice(bytes);
                Ok(SuiKeypair {
                    signing_key: SigningKey::from_bytes(&seed),
                })
            }
            KEYPAIR_LENGTH => {
                let keypair = Self::from_bytes(&bytes[..SECRET_KEY_LENGTH])?;
                if keypair.public_key().as_bytes()[..] != bytes[SECRET_KEY_LENGTH..] {
                    return Err(KeyError::MismatchedPublicKey);
                }
                Ok(keypair)
            }
            other => Err(KeyError::Length(other)),
        }
    }

    /// Ed25519 verifying key
    pub fn public_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// `blake2b256(flag || public key)`
    pub fn address(&self) -> SuiAddress {
        let mut preimage = Vec::with_capacity(1 + PUBLIC_KEY_LENGTH);
        preimage.push(ED25519_FLAG);
        preimage.extend_from_slice(self.public_key().as_bytes());
        SuiAddress::new(blake2b256(&preimage))
    }

    /// Sign BCS `TransactionData` bytes under the transaction intent
    pub fn sign_transaction(&self, tx_bytes: &[u8]) -> SuiSignature {
        let mut message = Vec::with_capacity(TRANSACTION_INTENT.len() + tx_bytes.len());
        message.extend_from_slice(&TRANSACTION_INTENT);
        message.extend_from_slice(tx_bytes);
        let digest = blake2b256(&message);
        let signature = self.signing_key.sign(&digest);

        let mut serialized = [0u8; SERIALIZED_SIGNATURE_LENGTH];
        serialized[0] = ED25519_FLAG;
        serialized[1..1 + SIGNATURE_LENGTH].copy_from_slice(&signature.to_bytes());
        serialized[1 + SIGNATURE_LENGTH..].copy_from_slice(self.public_key().as_bytes());
        SuiSignature(serialized)
    }
}

impl fmt::Debug for SuiKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiKeypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

/// `flag || signature || public key`, as the node expects it
#[derive(Clone, PartialEq, Eq)]
pub struct SuiSignature([u8; SERIALIZED_SIGNATURE_LENGTH]);

impl SuiSignature {
    /// Raw serialized bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Form accepted by `sui_executeTransactionBlock`
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl fmt::Debug for SuiSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiSignature({})", self.to_base64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, Verifier};

    const SEED_HEX: &str = "0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f";

    #[test]
    fn derivation_is_deterministic() {
        let a = SuiKeypair::from_hex(SEED_HEX).unwrap();
        let b = SuiKeypair::from_hex(&format!("0x{}", SEED_HEX)).unwrap();
        assert_eq!(a.address(), b.address());
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn hex_prefix_is_case_insensitive() {
        let bare = SuiKeypair::from_hex(SEED_HEX).unwrap();
        let upper = SuiKeypair::from_hex(&format!("0X{}", SEED_HEX)).unwrap();
        assert_eq!(bare.address(), upper.address());
        assert_eq!(
            "0X2".parse::<SuiAddress>().unwrap(),
            "0x2".parse::<SuiAddress>().unwrap()
        );
    }

    #[test]
    fn address_is_hash_of_flagged_public_key() {
        let keypair = SuiKeypair::from_hex(SEED_HEX).unwrap();
        let mut preimage = vec![ED25519_FLAG];
        preimage.extend_from_slice(keypair.public_key().as_bytes());
        assert_eq!(keypair.address().as_bytes(), &blake2b256(&preimage));
    }

    #[test]
    fn accepts_legacy_keypair_export() {
        let keypair = SuiKeypair::from_hex(SEED_HEX).unwrap();
        let legacy = format!("{}{}", SEED_HEX, hex::encode(keypair.public_key().as_bytes()));
        let restored = SuiKeypair::from_hex(&legacy).unwrap();
        assert_eq!(restored.address(), keypair.address());
    }

    #[test]
    fn rejects_mismatched_legacy_export() {
        let legacy = format!("{}{}", SEED_HEX, "00".repeat(PUBLIC_KEY_LENGTH));
        assert!(matches!(
            SuiKeypair::from_hex(&legacy),
            Err(KeyError::MismatchedPublicKey)
        ));
    }

    #[test]
    fn rejects_bad_secrets() {
        assert!(matches!(
            SuiKeypair::from_hex("not hex"),
            Err(KeyError::Hex(_))
        ));
        assert!(matches!(
            SuiKeypair::from_hex("abcd"),
            Err(KeyError::Length(2))
        ));
        assert!(matches!(SuiKeypair::from_hex(""), Err(KeyError::Length(0))));
    }

    #[test]
    fn signature_verifies_over_intent_digest() {
        let keypair = SuiKeypair::from_hex(SEED_HEX).unwrap();
        let tx_bytes = b"some transaction data";
        let serialized = keypair.sign_transaction(tx_bytes);
        let bytes = serialized.as_bytes();
        assert_eq!(bytes.len(), SERIALIZED_SIGNATURE_LENGTH);
        assert_eq!(bytes[0], ED25519_FLAG);
        assert_eq!(&bytes[1 + SIGNATURE_LENGTH..], keypair.public_key().as_bytes());

        let mut message = TRANSACTION_INTENT.to_vec();
        message.extend_from_slice(tx_bytes);
        let signature = Signature::from_slice(&bytes[1..1 + SIGNATURE_LENGTH]).unwrap();
        keypair
            .public_key()
            .verify(&blake2b256(&message), &signature)
            .unwrap();
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let keypair = SuiKeypair::from_hex(SEED_HEX).unwrap();
        let debug = format!("{:?}", keypair);
        assert!(!debug.contains(SEED_HEX));
        assert!(debug.contains("address"));
    }
}
