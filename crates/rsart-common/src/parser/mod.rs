use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::extraction;
use crate::Candidate;

/// アップロードされうるドキュメント種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Txt,
}

impl DocumentKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),
    /// 種別は既知だがこのクレートにデコーダがない（コラボレータ側で実装する）
    #[error("no parser available for {0} documents")]
    Unsupported(&'static str),
    #[error("no text extracted from document: {0}")]
    EmptyDocument(String),
}

/// ドキュメント 1 件を平文テキスト + Candidate に変換するパーサの差し込み口。
///
/// PDF / DOC / DOCX のデコードは除外コラボレータの責務で、このクレートは
/// 平文（.txt）実装のみを持つ。バイナリ形式のデコーダはこの trait を実装して
/// `parse_all` に渡せば同じ劣化許容ポリシーに乗る。
pub trait DocumentParser: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> DocumentKind;

    /// 生バイト列から平文テキストを取り出す
    fn extract_text(&self, file_name: &str, bytes: &[u8]) -> Result<String, ParseError>;

    /// テキスト抽出 + 構造化項目ヒューリスティクスで Candidate を組み立てる
    fn parse(&self, id: &str, file_name: &str, bytes: &[u8]) -> Result<Candidate, ParseError> {
        let text = self.extract_text(file_name, bytes)?;
        let info = extraction::extract_all(&text);

        let candidate = Candidate {
            id: id.to_string(),
            name: info.name,
            email: info.email,
            phone: info.phone,
            skills: info.skills,
            education: info.education,
            experience: info.experience,
            resume_path: Some(PathBuf::from(file_name)),
            resume_text: text,
            score: None,
            rank: None,
        };
        info!(
            candidate = %candidate.display_name(),
            kind = self.kind().as_str(),
            "parsed resume document"
        );
        Ok(candidate)
    }
}

/// 平文テキスト（.txt）パーサ
#[derive(Debug)]
pub struct PlainTextParser;

impl DocumentParser for PlainTextParser {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Txt
    }

    fn extract_text(&self, file_name: &str, bytes: &[u8]) -> Result<String, ParseError> {
        let text = String::from_utf8_lossy(bytes);
        if text.trim().is_empty() {
            return Err(ParseError::EmptyDocument(file_name.to_string()));
        }
        Ok(text.into_owned())
    }
}

/// 拡張子に対応するパーサを返すファクトリ。
/// バイナリ形式は種別既知でもデコーダ未登録として弾く。
pub fn parser_for_extension(extension: &str) -> Result<Box<dyn DocumentParser>, ParseError> {
    match DocumentKind::from_extension(extension) {
        Some(DocumentKind::Txt) => Ok(Box::new(PlainTextParser)),
        Some(kind) => Err(ParseError::Unsupported(kind.as_str())),
        None => Err(ParseError::UnsupportedExtension(extension.to_string())),
    }
}

/// アップロード 1 件分の入力
#[derive(Debug, Clone)]
pub struct Upload {
    pub id: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 複数アップロードを一括パースする。
///
/// 1 件の失敗はそのドキュメントを warn ログ付きで落とすだけで、
/// 残りのパース（とその後のランキング）は続行する。
pub fn parse_all(parser: &dyn DocumentParser, uploads: &[Upload]) -> Vec<Candidate> {
    uploads
        .iter()
        .filter_map(|upload| {
            match parser.parse(&upload.id, &upload.file_name, &upload.bytes) {
                Ok(candidate) => Some(candidate),
                Err(err) => {
                    warn!(
                        file = %upload.file_name,
                        error = %err,
                        "skipping resume that failed to parse"
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_detected_case_insensitively_with_or_without_dot() {
        assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension(".docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_extension("txt"), Some(DocumentKind::Txt));
        assert_eq!(DocumentKind::from_extension("exe"), None);
    }

    #[test]
    fn factory_returns_plain_text_parser_only() {
        assert!(parser_for_extension("txt").is_ok());
        assert_eq!(
            parser_for_extension("pdf").unwrap_err(),
            ParseError::Unsupported("pdf")
        );
        assert_eq!(
            parser_for_extension("exe").unwrap_err(),
            ParseError::UnsupportedExtension("exe".to_string())
        );
    }

    #[test]
    fn plain_text_parser_builds_a_candidate_with_extracted_fields() {
        let text = b"John Smith\njohn@example.com\nPython and SQL experience";
        let candidate = PlainTextParser
            .parse("c-1", "john_smith.txt", text)
            .unwrap();

        assert_eq!(candidate.id, "c-1");
        assert_eq!(candidate.name.as_deref(), Some("John Smith"));
        assert_eq!(candidate.email.as_deref(), Some("john@example.com"));
        assert!(candidate.skills.contains(&"Python".to_string()));
        assert!(candidate.resume_text.contains("SQL experience"));
        assert!(candidate.score.is_none());
        assert!(candidate.rank.is_none());
    }

    #[test]
    fn empty_document_is_a_parse_error() {
        let err = PlainTextParser
            .parse("c-2", "blank.txt", b"  \n ")
            .unwrap_err();
        assert_eq!(err, ParseError::EmptyDocument("blank.txt".to_string()));
    }

    #[test]
    fn parse_all_drops_failing_documents_and_keeps_the_rest() {
        let uploads = vec![
            Upload {
                id: "good".into(),
                file_name: "good.txt".into(),
                bytes: b"Jane Doe\nPython engineer".to_vec(),
            },
            Upload {
                id: "bad".into(),
                file_name: "bad.txt".into(),
                bytes: b"".to_vec(),
            },
        ];

        let candidates = parse_all(&PlainTextParser, &uploads);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "good");
    }
}
