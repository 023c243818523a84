//! Wallet keys, derived in-process from a family seed.
//!
//! Seeds never leave this module: the private key is derived here and used
//! here to sign, and only the public key and the signature go on the wire.
//!
//! Two key families exist on the ledger:
//! - Ed25519 (`sEd...` seeds): the private key is SHA-512-half of the seed
//!   entropy. Public keys carry a `0xED` prefix. The signature covers the
//!   signing data itself.
//! - secp256k1 (other `s...` seeds): a root key is derived from the entropy,
//!   then the account key for index 0 is derived from the root public key.
//!   The signature covers the SHA-512-half of the signing data and is DER
//!   encoded in low-S form.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::PrimeField;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;

use crate::ports::LedgerError;

const ED25519_SEED_PREFIX: [u8; 3] = [0x01, 0xE1, 0x4B];
const SECP256K1_SEED_PREFIX: u8 = 0x21;
const ACCOUNT_ID_PREFIX: u8 = 0x00;
const ED25519_KEY_PREFIX: u8 = 0xED;

#[derive(Debug, Error, PartialEq, Eq)]
pub(super) enum KeyError {
    #[error("seed is not valid base58: {0}")]
    SeedEncoding(String),

    #[error("seed has an unknown version or length")]
    SeedVersion,

    #[error("address is not a valid classic address: {0}")]
    Address(String),

    #[error("seed does not yield a usable secp256k1 key")]
    Derivation,

    #[error("signing failed: {0}")]
    Signing(String),
}

impl From<KeyError> for LedgerError {
    fn from(err: KeyError) -> Self {
        LedgerError::InvalidInput(err.to_string())
    }
}

/// First half of a SHA-512 digest, the ledger's standard hash.
pub(super) fn sha512_half(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    half
}

fn base58_encode(payload: &[u8]) -> String {
    bs58::encode(payload)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check()
        .into_string()
}

fn base58_decode(encoded: &str) -> Result<Vec<u8>, bs58::decode::Error> {
    bs58::decode(encoded)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check(None)
        .into_vec()
}

/// Decodes a classic `r...` address into its 20-byte account id.
pub(super) fn decode_address(address: &str) -> Result<[u8; 20], KeyError> {
    let bytes = base58_decode(address.trim()).map_err(|e| KeyError::Address(e.to_string()))?;
    if bytes.len() != 21 || bytes[0] != ACCOUNT_ID_PREFIX {
        return Err(KeyError::Address(address.to_string()));
    }
    let mut id = [0u8; 20];
    id.copy_from_slice(&bytes[1..]);
    Ok(id)
}

pub(super) fn encode_address(account_id: &[u8; 20]) -> String {
    let mut payload = Vec::with_capacity(21);
    payload.push(ACCOUNT_ID_PREFIX);
    payload.extend_from_slice(account_id);
    base58_encode(&payload)
}

enum SigningKey {
    Ed25519(ed25519_dalek::SigningKey),
    Secp256k1(k256::SecretKey),
}

/// A wallet's signing key with its public key and account id.
pub(super) struct Keypair {
    key: SigningKey,
    public_key: Vec<u8>,
    account_id: [u8; 20],
}

impl Keypair {
    pub fn from_seed(seed: &str) -> Result<Self, KeyError> {
        let decoded =
            base58_decode(seed.trim()).map_err(|e| KeyError::SeedEncoding(e.to_string()))?;

        match decoded.as_slice() {
            [a, b, c, entropy @ ..] if [*a, *b, *c] == ED25519_SEED_PREFIX && entropy.len() == 16 => {
                Ok(Self::ed25519(entropy))
            }
            [version, entropy @ ..] if *version == SECP256K1_SEED_PREFIX && entropy.len() == 16 => {
                Self::secp256k1(entropy)
            }
            _ => Err(KeyError::SeedVersion),
        }
    }

    fn ed25519(entropy: &[u8]) -> Self {
        let key = ed25519_dalek::SigningKey::from_bytes(&sha512_half(&[entropy]));
        let mut public_key = Vec::with_capacity(33);
        public_key.push(ED25519_KEY_PREFIX);
        public_key.extend_from_slice(key.verifying_key().as_bytes());
        Self::assemble(SigningKey::Ed25519(key), public_key)
    }

    fn secp256k1(entropy: &[u8]) -> Result<Self, KeyError> {
        let root = derive_secret(entropy, None)?;
        let root_public = compressed(&root);
        let intermediate = derive_secret(&root_public, Some(0))?;

        let sum = *root.to_nonzero_scalar() + *intermediate.to_nonzero_scalar();
        let account = k256::SecretKey::from_bytes(&sum.to_repr()).map_err(|_| KeyError::Derivation)?;
        let public_key = compressed(&account);
        Ok(Self::assemble(SigningKey::Secp256k1(account), public_key))
    }

    fn assemble(key: SigningKey, public_key: Vec<u8>) -> Self {
        let account_id = account_id(&public_key);
        Self {
            key,
            public_key,
            account_id,
        }
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(&self.public_key)
    }

    pub fn account_id(&self) -> &[u8; 20] {
        &self.account_id
    }

    pub fn classic_address(&self) -> String {
        encode_address(&self.account_id)
    }

    /// Signs transaction signing data (hash prefix included).
    pub fn sign(&self, signing_data: &[u8]) -> Result<Vec<u8>, KeyError> {
        match &self.key {
            SigningKey::Ed25519(key) => {
                use ed25519_dalek::Signer;
                Ok(key.sign(signing_data).to_bytes().to_vec())
            }
            SigningKey::Secp256k1(secret) => {
                let key = k256::ecdsa::SigningKey::from(secret.clone());
                let digest = sha512_half(&[signing_data]);
                let signature: k256::ecdsa::Signature = key
                    .sign_prehash(&digest)
                    .map_err(|e| KeyError::Signing(e.to_string()))?;
                let signature = signature.normalize_s().unwrap_or(signature);
                Ok(signature.to_der().as_bytes().to_vec())
            }
        }
    }
}

/// RIPEMD-160 of SHA-256 of the public key.
fn account_id(public_key: &[u8]) -> [u8; 20] {
    let digest = Ripemd160::digest(Sha256::digest(public_key));
    let mut id = [0u8; 20];
    id.copy_from_slice(&digest);
    id
}

fn compressed(secret: &k256::SecretKey) -> Vec<u8> {
    secret
        .public_key()
        .to_encoded_point(true)
        .as_bytes()
        .to_vec()
}

/// First SHA-512-half of `bytes || [discriminator] || counter` that is a
/// valid secp256k1 secret.
fn derive_secret(bytes: &[u8], discriminator: Option<u32>) -> Result<k256::SecretKey, KeyError> {
    for counter in 0..=u32::MAX {
        let candidate = match discriminator {
            Some(d) => sha512_half(&[bytes, &d.to_be_bytes(), &counter.to_be_bytes()]),
            None => sha512_half(&[bytes, &counter.to_be_bytes()]),
        };
        if let Ok(secret) = k256::SecretKey::from_slice(&candidate) {
            return Ok(secret);
        }
    }
    Err(KeyError::Derivation)
}
