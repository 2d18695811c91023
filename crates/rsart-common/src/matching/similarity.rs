/// コサイン類似度。
///
/// TF-IDF 重みは非負なので値域は 0.0〜1.0。どちらかのノルムが 0 の場合は
/// 類似度を 0 と定義する（エラーにしない）。
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "vector dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// ジョブベクトルと各候補者ベクトルの類似度を入力順のまま返す。
pub fn score_candidates(job: &[f64], candidates: &[Vec<f64>]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| cosine_similarity(job, candidate))
        .collect()
}
