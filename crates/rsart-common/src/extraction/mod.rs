use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strsim::damerau_levenshtein;

/// 履歴書テキストから正規表現ヒューリスティクスで拾える構造化項目。
/// 抽出精度は保証しない（マッチングコアには影響しない付随メタデータ）。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ExtractedInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
}

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    // 国番号付き・ハイフン/ドット/空白区切りの米国式 10 桁
    static ref PHONE_RE: Regex =
        Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
    static ref ALPHA_WORD_RE: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
}

/// スキル辞書（簡易版）。本格運用では外部スキル DB に差し替える前提。
const COMMON_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "sql",
    "react",
    "angular",
    "vue",
    "machine learning",
    "data analysis",
    "project management",
    "communication",
    "leadership",
    "teamwork",
];

const EDUCATION_KEYWORDS: &[&str] = &["degree", "university", "college", "bachelor", "master", "phd"];
const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work", "employed", "position", "role"];

/// 全ヒューリスティクスをまとめて実行
pub fn extract_all(text: &str) -> ExtractedInfo {
    ExtractedInfo {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text),
        education: extract_education(text),
        experience: extract_experience(text),
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

/// 先頭 5 行のうち「英字 2 単語ちょうど」の行を氏名とみなす
pub fn extract_name(text: &str) -> Option<String> {
    for line in text.lines().take(5) {
        let line = line.trim();
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() == 2 && words.iter().all(|w| ALPHA_WORD_RE.is_match(w)) {
            return Some(line.to_string());
        }
    }
    None
}

/// スキル辞書との照合。部分文字列一致に加え、5 文字以上の単語スキルは
/// 編集距離 1 までのゆらぎ（タイポ・表記揺れ）を許容する。
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    COMMON_SKILLS
        .iter()
        .filter(|skill| {
            if lowered.contains(*skill) {
                return true;
            }
            // 単語スキルのみ fuzzy 照合（"pyhton" → "python" 等）
            !skill.contains(' ')
                && skill.len() >= 5
                && tokens
                    .iter()
                    .any(|token| damerau_levenshtein(token, skill) <= 1)
        })
        .map(|skill| title_case(skill))
        .collect()
}

pub fn extract_education(text: &str) -> Vec<String> {
    lines_with_keywords(text, EDUCATION_KEYWORDS)
}

pub fn extract_experience(text: &str) -> Vec<String> {
    lines_with_keywords(text, EXPERIENCE_KEYWORDS)
}

fn lines_with_keywords(text: &str, keywords: &[&str]) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let lowered = line.to_lowercase();
            if keywords.iter().any(|kw| lowered.contains(kw)) {
                Some(line.trim().to_string())
            } else {
                None
            }
        })
        .collect()
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
