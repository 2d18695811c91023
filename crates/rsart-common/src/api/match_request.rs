use serde::Deserialize;

use crate::config::MatcherConfig;
use crate::{Candidate, JobDescription};

/// HTTP コラボレータからのマッチリクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub job: JobDescription,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// 返却件数上限の上書き（未指定はサービス設定値）
    #[serde(default)]
    pub limit: Option<usize>,
    /// 類似度閾値の上書き（未指定はサービス設定値）
    #[serde(default)]
    pub similarity_threshold: Option<f64>,
}

impl MatchRequest {
    /// サービス側のデフォルト設定にリクエストの上書きを適用する
    pub fn effective_config(&self, base: &MatcherConfig) -> MatcherConfig {
        MatcherConfig {
            top_candidates_count: self.limit.unwrap_or(base.top_candidates_count),
            similarity_threshold: self
                .similarity_threshold
                .unwrap_or(base.similarity_threshold),
            ..base.clone()
        }
    }
}
