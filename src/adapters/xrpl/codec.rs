//! Canonical binary encoding of a Payment transaction.
//!
//! Fields are written in canonical order: by type code, then field code.

use super::keys::{sha512_half, KeyError, Keypair};

/// Prefix of the data a signature covers ("STX\0").
const SIGNING_PREFIX: [u8; 4] = [0x53, 0x54, 0x58, 0x00];
/// Prefix of the data a transaction id is hashed from ("TXN\0").
const TX_ID_PREFIX: [u8; 4] = [0x54, 0x58, 0x4E, 0x00];

/// Upper bound for a native amount, 10^17 drops.
pub(super) const MAX_DROPS: u64 = 100_000_000_000_000_000;

const PAYMENT: u16 = 0;
const NATIVE_POSITIVE: u64 = 0x4000_0000_0000_0000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Payment {
    pub account: [u8; 20],
    pub destination: [u8; 20],
    pub amount_drops: u64,
    pub fee_drops: u64,
    pub sequence: u32,
    pub last_ledger_sequence: u32,
    pub signing_pub_key: Vec<u8>,
}

/// A signed transaction ready for `submit`.
#[derive(Debug, Clone)]
pub(super) struct SignedTransaction {
    /// Upper-case hex of the signed blob.
    pub tx_blob: String,
    /// Transaction id, known before submission.
    pub hash: String,
    pub last_ledger_sequence: u32,
}

impl Payment {
    fn encode(&self, signature: Option<&[u8]>) -> Vec<u8> {
        let mut out = Vec::with_capacity(256);

        // UInt16 TransactionType
        out.push(0x12);
        out.extend_from_slice(&PAYMENT.to_be_bytes());

        // UInt32 Flags, Sequence, LastLedgerSequence
        out.push(0x22);
        out.extend_from_slice(&0u32.to_be_bytes());
        out.push(0x24);
        out.extend_from_slice(&self.sequence.to_be_bytes());
        out.extend_from_slice(&[0x20, 0x1B]);
        out.extend_from_slice(&self.last_ledger_sequence.to_be_bytes());

        // Amount Amount, Fee
        out.push(0x61);
        out.extend_from_slice(&native_amount(self.amount_drops));
        out.push(0x68);
        out.extend_from_slice(&native_amount(self.fee_drops));

        // Blob SigningPubKey, TxnSignature
        out.push(0x73);
        push_vl(&mut out, &self.signing_pub_key);
        if let Some(signature) = signature {
            out.push(0x74);
            push_vl(&mut out, signature);
        }

        // AccountID Account, Destination
        out.push(0x81);
        push_vl(&mut out, &self.account);
        out.push(0x83);
        push_vl(&mut out, &self.destination);

        out
    }

    /// The bytes a signature covers.
    pub fn signing_data(&self) -> Vec<u8> {
        let mut data = SIGNING_PREFIX.to_vec();
        data.extend_from_slice(&self.encode(None));
        data
    }

    pub fn sign(&self, keypair: &Keypair) -> Result<SignedTransaction, KeyError> {
        let signature = keypair.sign(&self.signing_data())?;
        let blob = self.encode(Some(&signature));
        let hash = sha512_half(&[&TX_ID_PREFIX[..], blob.as_slice()]);
        Ok(SignedTransaction {
            tx_blob: hex::encode_upper(&blob),
            hash: hex::encode_upper(hash),
            last_ledger_sequence: self.last_ledger_sequence,
        })
    }
}

fn native_amount(drops: u64) -> [u8; 8] {
    (drops | NATIVE_POSITIVE).to_be_bytes()
}

/// Length-prefixed field body (one length byte up to 192, two up to 12480).
fn push_vl(out: &mut Vec<u8>, bytes: &[u8]) {
    let len = bytes.len();
    if len <= 192 {
        out.push(len as u8);
    } else {
        let rest = len - 193;
        out.push(193 + (rest >> 8) as u8);
        out.push((rest & 0xFF) as u8);
    }
    out.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment() -> Payment {
        Payment {
            account: [0x11; 20],
            destination: [0x22; 20],
            amount_drops: 5_000_000,
            fee_drops: 12,
            sequence: 7,
            last_ledger_sequence: 30,
            signing_pub_key: vec![0xED; 33],
        }
    }

    #[test]
    fn unsigned_encoding_is_canonical() {
        let encoded = payment().encode(None);
        let mut expected = String::from(
            "120000\
             2200000000\
             2400000007\
             201B0000001E\
             6140000000004C4B40\
             68400000000000000C",
        );
        expected.push_str(&format!("7321{}", "ED".repeat(33)));
        expected.push_str(&format!("8114{}", "11".repeat(20)));
        expected.push_str(&format!("8314{}", "22".repeat(20)));
        assert_eq!(hex::encode_upper(encoded), expected);
    }

    #[test]
    fn signing_data_starts_with_prefix() {
        assert_eq!(&payment().signing_data()[..4], b"STX\0");
    }

    #[test]
    fn signature_sits_between_public_key_and_account() {
        let encoded = payment().encode(Some(&[0xAB; 64]));
        let encoded = hex::encode_upper(encoded);
        let key_at = encoded.find("7321").unwrap();
        let sig_at = encoded.find(&format!("7440{}", "AB".repeat(64))).unwrap();
        let account_at = encoded.find("8114").unwrap();
        assert!(key_at < sig_at && sig_at < account_at);
    }

    #[test]
    fn long_blobs_use_two_byte_length() {
        let mut out = Vec::new();
        push_vl(&mut out, &[0u8; 200]);
        assert_eq!(&out[..2], &[193, 7]);
        assert_eq!(out.len(), 202);
    }
}
