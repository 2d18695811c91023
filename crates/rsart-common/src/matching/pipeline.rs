use thiserror::Error;
use tracing::{info, warn};

use super::{
    rank::rank_and_filter,
    similarity::score_candidates,
    vectorize::{TfidfVectorizer, VectorizeError},
};
use crate::{config::MatcherConfig, text, Candidate, JobDescription};

#[derive(Debug, Error)]
pub enum MatchingError {
    /// コーパス全体から語彙が作れなかった（"no matchable content"）。
    /// このリクエストのみ中断し、呼び出し側がユーザー向けメッセージに変換する。
    #[error("failed to vectorize corpus: {0}")]
    Vectorize(#[from] VectorizeError),
}

/// 履歴書とジョブ記述のマッチングサービス。
///
/// 1 回の呼び出しで normalize → TF-IDF fit → cosine → rank/filter を同期的に
/// 実行する。保持するのは設定のみで、fit 済み語彙をリクエスト間で共有しない。
/// そのため複数スレッドから同一インスタンスを並行に使ってよい。
pub struct MatchingService {
    config: MatcherConfig,
}

impl MatchingService {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn default() -> Self {
        Self::new(MatcherConfig::default())
    }

    /// 候補者をジョブ記述に対してランキングする。
    ///
    /// 返り値は score/rank が設定され、閾値でフィルタされ、上限件数に
    /// 切り詰められた候補者列。候補者ゼロは空 Vec の正常終了。
    pub fn match_candidates(
        &self,
        job: &JobDescription,
        candidates: Vec<Candidate>,
    ) -> Result<Vec<Candidate>, MatchingError> {
        info!(
            candidate_count = candidates.len(),
            job = %job.display_name(),
            "matching candidates against job"
        );

        if candidates.is_empty() {
            warn!("no candidates provided for matching");
            return Ok(Vec::new());
        }

        if !job.has_content() {
            warn!(job = %job.display_name(), "job description has no text; all scores will be zero");
        }

        let job_text = prepare_job_text(job);
        let candidate_texts: Vec<String> =
            candidates.iter().map(prepare_candidate_text).collect();

        // row 0 = ジョブ、以降は候補者（入力順）
        let mut corpus = Vec::with_capacity(candidate_texts.len() + 1);
        corpus.push(job_text);
        corpus.extend(candidate_texts);

        let vectorizer =
            TfidfVectorizer::new(self.config.max_features, self.config.ngram_range);
        let matrix = vectorizer.fit_transform(&corpus)?;

        let scores = score_candidates(matrix.row(0), matrix.candidate_rows());

        let mut scored = candidates;
        for (candidate, score) in scored.iter_mut().zip(scores) {
            candidate.score = Some(score);
        }

        let ranked = rank_and_filter(
            scored,
            self.config.similarity_threshold,
            self.config.top_candidates_count,
        );

        info!(
            matched_count = ranked.len(),
            threshold = self.config.similarity_threshold,
            "matched candidates above threshold"
        );
        Ok(ranked)
    }
}

/// description + requirements + skills を連結して正規化
fn prepare_job_text(job: &JobDescription) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if !job.description.is_empty() {
        parts.push(&job.description);
    }
    parts.extend(job.requirements.iter().map(String::as_str));
    parts.extend(job.skills.iter().map(String::as_str));

    text::normalize(&parts.join(" "))
}

/// resume_text + skills + experience + education を連結して正規化
fn prepare_candidate_text(candidate: &Candidate) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if !candidate.resume_text.is_empty() {
        parts.push(&candidate.resume_text);
    }
    parts.extend(candidate.skills.iter().map(String::as_str));
    parts.extend(candidate.experience.iter().map(String::as_str));
    parts.extend(candidate.education.iter().map(String::as_str));

    text::normalize(&parts.join(" "))
}
