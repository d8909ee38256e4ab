//! BLAKE3 hashing helpers for tenancy and cache keys.

use blake3::Hasher;

/// Computes the full 32-byte BLAKE3 hash of a text string.
///
/// Used as the exact-match key for the embedding cache, where the full
/// output keeps false hits computationally infeasible.
#[inline]
pub fn hash_text(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// 64 bits is plenty for the identifiers this crate derives (owner ids, FAQ
/// entry ids): the birthday bound sits around 4.3 billion items, and a
/// collision here degrades to a mismatched lookup rather than data
/// corruption. Nothing security-sensitive hangs off these values.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}

/// Maps an opaque owner credential (bearer token) to a 64-bit owner id.
///
/// The gateway performs no credential verification; it only needs a stable
/// tenant key to scope FAQ sets and chat history.
#[inline]
pub fn hash_owner_token(token: &str) -> u64 {
    hash_to_u64(token.as_bytes())
}

/// Derives a stable FAQ entry id from the owning tenant and question text.
#[inline]
pub fn faq_entry_id(owner_id: u64, question: &str) -> u64 {
    let mut hasher = Hasher::new();
    hasher.update(&owner_id.to_le_bytes());
    hasher.update(b"|");
    hasher.update(question.as_bytes());

    let hash = hasher.finalize();
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}
