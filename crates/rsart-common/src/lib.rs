pub mod api;
pub mod config;
pub mod extraction;
pub mod lemmatizer;
pub mod logging;
pub mod matching;
pub mod parser;
pub mod stopwords;
pub mod text;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDescription {
    pub id: String,
    pub title: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub source_path: Option<PathBuf>,
}

impl JobDescription {
    /// 表示名: title > ファイル名 > "Job_<id先頭8文字>"
    pub fn display_name(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        if let Some(stem) = self
            .source_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
        {
            return stem.to_string();
        }
        let short: String = self.id.chars().take(8).collect();
        format!("Job_{short}")
    }

    /// description / requirements / skills のいずれかが埋まっているか。
    /// 全て空の場合、類似度は定義できない（全候補スコア 0）。
    pub fn has_content(&self) -> bool {
        !self.description.trim().is_empty()
            || self.requirements.iter().any(|r| !r.trim().is_empty())
            || self.skills.iter().any(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub resume_path: Option<PathBuf>,
    pub resume_text: String,
    /// ランキング実行時に付与される。未採点は None。
    pub score: Option<f64>,
    /// 1始まりの dense rank。未採点は None。
    pub rank: Option<u32>,
}

impl Candidate {
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(stem) = self
            .resume_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
        {
            return stem.to_string();
        }
        let short: String = self.id.chars().take(8).collect();
        format!("Candidate_{short}")
    }
}
