use serde::{Deserialize, Serialize};

/// Fixed-length taxonomy signature: one weighted keyword count per category,
/// in taxonomy order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Signature {
    data: Vec<f32>,
}

impl Signature {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// All-zero signature with `dim` dimensions
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// True when every dimension is zero, i.e. the text matched no keyword.
    /// Such a signature cannot express a usable query.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| *x == 0.0)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        crate::numeric::magnitude(&self.data)
    }

    /// Cosine similarity with another signature.
    /// Zero vectors and length mismatches score exactly 0.
    #[inline]
    pub fn cosine_similarity(&self, other: &Signature) -> f32 {
        crate::numeric::cosine_similarity(&self.data, &other.data)
    }
}

impl From<Vec<f32>> for Signature {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

impl AsRef<Signature> for Signature {
    fn as_ref(&self) -> &Signature {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let sig = Signature::zeros(4);
        assert_eq!(sig.dim(), 4);
        assert!(sig.is_zero());
        assert_eq!(sig.magnitude(), 0.0);
    }

    #[test]
    fn test_cosine_similarity() {
        let s1 = Signature::new(vec![3.0, 0.0, 1.5]);
        let s2 = Signature::new(vec![3.0, 0.0, 1.5]);
        assert_eq!(s1.cosine_similarity(&s2), 1.0);

        let s3 = Signature::new(vec![3.0, 0.0]);
        let s4 = Signature::new(vec![0.0, 2.0]);
        assert_eq!(s3.cosine_similarity(&s4), 0.0);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let sig = Signature::new(vec![3.0, 1.5]);
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, "[3.0,1.5]");
        let parsed: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sig);
    }
}
