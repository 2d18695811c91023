#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// 返却する候補者数の上限
    pub top_candidates_count: usize,
    /// この類似度未満の候補者は足切り（0.0〜1.0）
    pub similarity_threshold: f64,
    /// TF-IDF 語彙サイズの上限
    pub max_features: usize,
    /// n-gram の範囲（最小, 最大）。デフォルトは unigram + bigram。
    pub ngram_range: (usize, usize),
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            top_candidates_count: 10,
            similarity_threshold: 0.1,
            max_features: 5000,
            ngram_range: (1, 2),
        }
    }
}

/// 環境変数から設定を読み込む。未設定・parse 失敗はデフォルト値。
/// コア自身は環境を読まない。呼び出し側サービスが起動時に使うヘルパー。
pub fn load_config_from_env() -> MatcherConfig {
    let defaults = MatcherConfig::default();
    MatcherConfig {
        top_candidates_count: std::env::var("RSART_TOP_CANDIDATES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.top_candidates_count),
        similarity_threshold: std::env::var("RSART_SIMILARITY_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.similarity_threshold),
        max_features: std::env::var("RSART_MAX_FEATURES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_features),
        ngram_range: defaults.ngram_range,
    }
}
