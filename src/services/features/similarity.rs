use super::FeatureVector;

/// Pairwise cosine similarity of every pair of vectors, row-major `n × n`
///
/// Only the upper triangle is computed; the lower triangle mirrors it so the
/// result is exactly symmetric. A zero vector is 0 against everything,
/// itself included. Every other diagonal entry is exactly 1.
pub fn cosine_similarity_matrix(vectors: &[FeatureVector]) -> Vec<f64> {
    let n = vectors.len();
    let norms: Vec<f64> = vectors.iter().map(|v| v.dot(v).sqrt()).collect();
    let mut values = vec![0.0; n * n];

    for i in 0..n {
        if norms[i] == 0.0 {
            continue;
        }
        values[i * n + i] = 1.0;
        for j in (i + 1)..n {
            if norms[j] == 0.0 {
                continue;
            }
            let sim = (vectors[i].dot(&vectors[j]) / (norms[i] * norms[j])).clamp(-1.0, 1.0);
            values[i * n + j] = sim;
            values[j * n + i] = sim;
        }
    }

    values
}
