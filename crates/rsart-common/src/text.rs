use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lemmatizer::lemmatize;
use crate::stopwords::is_stop_word;

static NON_ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static NON_ASCII_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());

/// マッチング前のテキスト正規化。
///
/// 小文字化 → 英字と空白以外を空白に置換 → 空白圧縮 → トークン分割 →
/// ストップワードと 3 文字未満を除去 → 見出し語化 → 空白 1 個で再結合。
///
/// 空入力・全ストップワード入力は空文字を返す（エラーではなく「信号なし」）。
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let alpha_only = NON_ALPHA_RE.replace_all(&lowered, " ");

    alpha_only
        .split_whitespace()
        .filter(|token| token.len() > 2 && !is_stop_word(token))
        .map(lemmatize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// HTML タグ・非 ASCII 文字を落とし、空白を圧縮する軽量クリーニング。
/// normalize() 前の生テキスト整形用。
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let without_tags = HTML_TAG_RE.replace_all(text, "");
    let ascii_only = NON_ASCII_RE.replace_all(&without_tags, " ");
    WHITESPACE_RE.replace_all(&ascii_only, " ").trim().to_string()
}

/// 正規化後の出現頻度で上位 top_n 語を返す。
/// 同頻度は初出順を保つ。
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let processed = normalize(text);

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for token in processed.split_whitespace() {
        let count = counts.entry(token.to_string()).or_insert(0);
        if *count == 0 {
            first_seen.push(token.to_string());
        }
        *count += 1;
    }

    // 安定ソートなので同頻度は初出順のまま
    first_seen.sort_by_key(|token| std::cmp::Reverse(counts[token]));
    first_seen.truncate(top_n);
    first_seen
}
