use serde::{Deserialize, Serialize};

use crate::Candidate;

/// ランキング済み候補者 1 件分の表示用レコード
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchedCandidate {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub score: f64,
    pub rank: u32,
}

/// プレゼンテーションコラボレータへ返すマッチング結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResponse {
    pub job_id: String,
    pub matches: Vec<MatchedCandidate>,
    pub total_candidates: usize,
}

impl MatchResponse {
    /// ランキング済み候補者列（score/rank 設定済み）からレスポンスを構築する。
    /// 未採点の候補者が紛れていた場合は 0 点・末尾 rank 扱いにはせず除外する。
    pub fn from_ranked(job_id: impl Into<String>, total_candidates: usize, ranked: &[Candidate]) -> Self {
        let matches = ranked
            .iter()
            .filter_map(|candidate| {
                let (score, rank) = (candidate.score?, candidate.rank?);
                Some(MatchedCandidate {
                    id: candidate.id.clone(),
                    display_name: candidate.display_name(),
                    email: candidate.email.clone(),
                    score,
                    rank,
                })
            })
            .collect();

        Self {
            job_id: job_id.into(),
            matches,
            total_candidates,
        }
    }
}
