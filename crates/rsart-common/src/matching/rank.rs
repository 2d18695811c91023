use std::cmp::Ordering;

use crate::Candidate;

/// スコア降順に安定ソートし、1 始まりの dense rank を振ったうえで
/// 閾値未満を除外し、上位 top_count 件に切り詰める。
///
/// - 同点は入力順を保持する（安定ソート。二次キーは定義しない）
/// - rank は同点でも連番（1,2,... とギャップなし）
/// - 全滅した場合は空 Vec（正常系）
pub fn rank_and_filter(
    mut candidates: Vec<Candidate>,
    similarity_threshold: f64,
    top_count: usize,
) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.score
            .unwrap_or(0.0)
            .partial_cmp(&a.score.unwrap_or(0.0))
            .unwrap_or(Ordering::Equal)
    });

    for (position, candidate) in candidates.iter_mut().enumerate() {
        candidate.rank = Some(position as u32 + 1);
    }

    candidates
        .into_iter()
        .filter(|c| c.score.unwrap_or(0.0) >= similarity_threshold)
        .take(top_count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, score: f64) -> Candidate {
        Candidate {
            id: id.into(),
            score: Some(score),
            ..Candidate::default()
        }
    }

    #[test]
    fn sorts_by_score_descending_with_dense_ranks() {
        let ranked = rank_and_filter(
            vec![candidate("low", 0.2), candidate("high", 0.9), candidate("mid", 0.5)],
            0.1,
            10,
        );

        let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        let ranks: Vec<u32> = ranked.iter().map(|c| c.rank.unwrap()).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn equal_scores_keep_input_order_and_get_distinct_ranks() {
        let ranked = rank_and_filter(
            vec![candidate("first", 0.5), candidate("second", 0.5)],
            0.1,
            10,
        );

        assert_eq!(ranked[0].id, "first");
        assert_eq!(ranked[1].id, "second");
        assert_eq!(ranked[0].rank, Some(1));
        assert_eq!(ranked[1].rank, Some(2));
    }

    #[test]
    fn threshold_filters_low_scores() {
        let ranked = rank_and_filter(
            vec![candidate("keep", 0.4), candidate("drop", 0.05)],
            0.1,
            10,
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "keep");
        assert!(ranked.iter().all(|c| c.score.unwrap() >= 0.1));
    }

    #[test]
    fn boundary_score_survives_the_threshold() {
        let ranked = rank_and_filter(vec![candidate("edge", 0.1)], 0.1, 10);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn cap_truncates_after_filtering() {
        let batch: Vec<Candidate> = (0..5)
            .map(|i| candidate(&format!("c{i}"), 0.9 - i as f64 * 0.1))
            .collect();

        let ranked = rank_and_filter(batch, 0.1, 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].id, "c0");
        assert_eq!(ranked[2].id, "c2");
    }

    #[test]
    fn nothing_surviving_yields_empty_not_error() {
        let ranked = rank_and_filter(vec![candidate("a", 0.01)], 0.1, 10);
        assert!(ranked.is_empty());
    }

    #[test]
    fn unscored_candidates_are_treated_as_zero() {
        let mut unscored = candidate("none", 0.0);
        unscored.score = None;

        let ranked = rank_and_filter(vec![unscored, candidate("scored", 0.3)], 0.1, 10);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "scored");
        assert_eq!(ranked[0].rank, Some(1));
    }
}
