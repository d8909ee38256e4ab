//! Embedding byte codec.
//!
//! Embeddings are persisted as raw little-endian `f32` bytes. Parsing is
//! strict: the byte length must be exactly `expected_dim * 4`. Stored data is
//! never interpreted as anything other than numbers.

use super::error::StoreError;

/// Bytes per stored f32 value.
pub const BYTES_PER_F32: usize = 4;

/// Convert f32 values to little-endian bytes.
pub fn f32_to_embedding_bytes(vector: &[f32]) -> Vec<u8> {
    vector.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Convert little-endian f32 bytes back to values, validating the length
/// against the expected dimension.
pub fn embedding_bytes_to_f32(bytes: &[u8], expected_dim: usize) -> Result<Vec<f32>, StoreError> {
    if bytes.len() != expected_dim * BYTES_PER_F32 {
        return Err(StoreError::MalformedEmbedding {
            expected: expected_dim * BYTES_PER_F32,
            actual: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(BYTES_PER_F32)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_exact() {
        let original = vec![0.1f32, -0.5, 1.0, 0.0, f32::MIN_POSITIVE];

        let bytes = f32_to_embedding_bytes(&original);
        assert_eq!(bytes.len(), original.len() * BYTES_PER_F32);

        let decoded = embedding_bytes_to_f32(&bytes, original.len()).expect("decode");
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_empty_vector() {
        let bytes = f32_to_embedding_bytes(&[]);
        assert!(bytes.is_empty());
        assert_eq!(
            embedding_bytes_to_f32(&bytes, 0).expect("decode"),
            Vec::<f32>::new()
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        let bytes = f32_to_embedding_bytes(&[1.0, 2.0]);

        let err = embedding_bytes_to_f32(&bytes, 3).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MalformedEmbedding {
                expected: 12,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_rejects_truncated_bytes() {
        let mut bytes = f32_to_embedding_bytes(&[1.0, 2.0]);
        bytes.pop();

        assert!(embedding_bytes_to_f32(&bytes, 2).is_err());
    }
}
