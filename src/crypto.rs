//! Hashing and signature-verification collaborators.
//!
//! The ledger core only consumes these two primitives: a stable content hash
//! for identities and a pure, stateless ECDSA verification over secp256k1.

use bitcoin_hashes::{sha256d, Hash as BitcoinHash, HashEngine};
use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1};
use sha2::{Digest, Sha256};

use crate::types::Hash;

/// Double SHA-256 over `data`, used for all content identities.
pub fn hash256(data: &[u8]) -> Hash {
    let mut hasher = sha256d::Hash::engine();
    hasher.input(data);
    let result = sha256d::Hash::from_engine(hasher);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Verify a DER-encoded ECDSA signature by `owner` (a serialized compressed
/// secp256k1 public key) over the SHA-256 digest of `message`.
///
/// Malformed keys and signatures are verification failures, never errors.
pub fn verify(owner: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let pubkey = match PublicKey::from_slice(owner) {
        Ok(pk) => pk,
        Err(_) => return false,
    };
    let sig = match Signature::from_der(signature) {
        Ok(s) => s,
        Err(_) => return false,
    };
    let digest = Sha256::digest(message);
    let msg = match Message::from_digest_slice(&digest) {
        Ok(m) => m,
        Err(_) => return false,
    };
    let secp = Secp256k1::verification_only();
    secp.verify_ecdsa(&msg, &sig, &pubkey).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secp256k1::SecretKey;

    fn keypair(seed: u8) -> (SecretKey, Vec<u8>) {
        let secp = Secp256k1::new();
        let sk = SecretKey::from_slice(&[seed; 32]).unwrap();
        let pk = PublicKey::from_secret_key(&secp, &sk);
        (sk, pk.serialize().to_vec())
    }

    fn sign(sk: &SecretKey, message: &[u8]) -> Vec<u8> {
        let secp = Secp256k1::new();
        let digest = Sha256::digest(message);
        let msg = Message::from_digest_slice(&digest).unwrap();
        secp.sign_ecdsa(&msg, sk).serialize_der().to_vec()
    }

    #[test]
    fn test_hash256_deterministic() {
        assert_eq!(hash256(b"abc"), hash256(b"abc"));
        assert_ne!(hash256(b"abc"), hash256(b"abd"));
    }

    #[test]
    fn test_verify_valid_signature() {
        let (sk, owner) = keypair(1);
        let sig = sign(&sk, b"payload");
        assert!(verify(&owner, b"payload", &sig));
    }

    #[test]
    fn test_verify_wrong_key() {
        let (sk, _) = keypair(1);
        let (_, other_owner) = keypair(2);
        let sig = sign(&sk, b"payload");
        assert!(!verify(&other_owner, b"payload", &sig));
    }

    #[test]
    fn test_verify_wrong_message() {
        let (sk, owner) = keypair(1);
        let sig = sign(&sk, b"payload");
        assert!(!verify(&owner, b"other payload", &sig));
    }

    #[test]
    fn test_verify_malformed_inputs() {
        let (sk, owner) = keypair(1);
        let sig = sign(&sk, b"payload");
        assert!(!verify(b"not a key", b"payload", &sig));
        assert!(!verify(&owner, b"payload", b"not a signature"));
        assert!(!verify(&[], b"payload", &[]));
    }
}
