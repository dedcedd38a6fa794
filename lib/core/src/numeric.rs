// Numeric helpers shared by the encoder and the ranker.
// Sums are carried in f64; cosine(a, a) narrows to exactly 1.0 as f32.

/// Dot product of two equal-length slices.
///
/// Returns 0.0 when the lengths differ.
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot0 = 0.0f64;
    let mut dot1 = 0.0f64;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        dot0 += a_chunk[0] as f64 * b_chunk[0] as f64 + a_chunk[1] as f64 * b_chunk[1] as f64;
        dot1 += a_chunk[2] as f64 * b_chunk[2] as f64 + a_chunk[3] as f64 * b_chunk[3] as f64;
    }

    for i in (a.len() - remainder.len())..a.len() {
        dot0 += a[i] as f64 * b[i] as f64;
    }

    dot0 + dot1
}

/// Euclidean length of a slice.
#[inline]
pub fn magnitude(v: &[f32]) -> f64 {
    dot_product(v, v).sqrt()
}

/// Cosine similarity in [0, 1] for non-negative inputs.
///
/// Degenerate inputs never produce NaN: a length mismatch, a zero-magnitude
/// side or a non-finite component all yield exactly 0.0.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let norm_a = magnitude(a);
    let norm_b = magnitude(b);

    if norm_a == 0.0 || norm_b == 0.0 || !norm_a.is_finite() || !norm_b.is_finite() {
        return 0.0;
    }

    let cosine = dot_product(a, b) / (norm_a * norm_b);
    if !cosine.is_finite() {
        return 0.0;
    }

    cosine.clamp(0.0, 1.0) as f32
}
