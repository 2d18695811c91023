use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VectorizeError {
    /// 全ドキュメントが正規化で空になった等、コーパスから語彙が作れない。
    /// 呼び出し側はリクエスト単位の致命エラー（"no matchable content"）として扱う。
    #[error("empty vocabulary: no terms survived across the corpus")]
    EmptyVocabulary,
}

/// 1 リクエスト分のコーパスに対する TF-IDF 行列。
/// row 0 = ジョブ、row 1.. = 候補者（入力順）。
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// アルファベット順の語彙（列の並び）
    pub vocabulary: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// row 0 を除いた候補者ベクトル群
    pub fn candidate_rows(&self) -> &[Vec<f64>] {
        &self.rows[1..]
    }
}

/// リクエストごとに語彙を組み直す fit-and-transform 一体の TF-IDF ベクトライザ。
///
/// 語彙はこのコーパス（ジョブ + 今回の候補者バッチ）からのみ導出する。
/// リクエストを跨いで fit 済みモデルを共有しない。スコアは同一ラン内でのみ
/// 比較可能で、ラン間の比較は意味を持たない。
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
    ngram_range: (usize, usize),
}

impl TfidfVectorizer {
    pub fn new(max_features: usize, ngram_range: (usize, usize)) -> Self {
        let (lo, hi) = ngram_range;
        Self {
            max_features: max_features.max(1),
            ngram_range: (lo.max(1), hi.max(lo.max(1))),
        }
    }

    /// 正規化済みドキュメント列から TF-IDF 行列を構築する。
    ///
    /// - TF: ドキュメント内の生出現回数
    /// - IDF: smooth 形 `ln((1+n)/(1+df)) + 1`
    /// - 行は L2 正規化（ゼロベクトルはそのまま）
    pub fn fit_transform(&self, documents: &[String]) -> Result<TfidfMatrix, VectorizeError> {
        let term_counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| self.count_terms(doc))
            .collect();

        let vocabulary = self.build_vocabulary(&term_counts)?;
        let column: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        // document frequency
        let mut df = vec![0usize; vocabulary.len()];
        for counts in &term_counts {
            for term in counts.keys() {
                if let Some(&col) = column.get(term.as_str()) {
                    df[col] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = term_counts
            .iter()
            .map(|counts| {
                let mut row = vec![0.0f64; vocabulary.len()];
                for (term, &count) in counts {
                    if let Some(&col) = column.get(term.as_str()) {
                        row[col] = count as f64 * idf[col];
                    }
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(TfidfMatrix { vocabulary, rows })
    }

    /// unigram〜bigram（設定次第）のターム出現回数
    fn count_terms(&self, document: &str) -> HashMap<String, usize> {
        let tokens: Vec<&str> = document.split_whitespace().collect();
        let (lo, hi) = self.ngram_range;

        let mut counts = HashMap::new();
        for n in lo..=hi {
            if n == 0 || tokens.len() < n {
                continue;
            }
            for window in tokens.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0) += 1;
            }
        }
        counts
    }

    /// コーパス全体の出現回数上位 max_features 語を選び、列順はアルファベット順。
    /// 同数はターム昇順で決定的にタイブレーク。
    fn build_vocabulary(
        &self,
        term_counts: &[HashMap<String, usize>],
    ) -> Result<Vec<String>, VectorizeError> {
        let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
        for counts in term_counts {
            for (term, &count) in counts {
                *corpus_counts.entry(term.as_str()).or_insert(0) += count;
            }
        }

        if corpus_counts.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let mut terms: Vec<(&str, usize)> = corpus_counts.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(self.max_features);

        let mut vocabulary: Vec<String> = terms.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();
        Ok(vocabulary)
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer::new(5000, (1, 2))
    }

    #[test]
    fn rows_are_l2_normalized() {
        let docs = vec![
            "python developer sql".to_string(),
            "python engineer".to_string(),
        ];
        let matrix = vectorizer().fit_transform(&docs).unwrap();

        for i in 0..matrix.row_count() {
            let norm: f64 = matrix.row(i).iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "row {i} norm was {norm}");
        }
    }

    #[test]
    fn vocabulary_includes_bigrams_and_is_sorted() {
        let docs = vec!["python developer".to_string()];
        let matrix = vectorizer().fit_transform(&docs).unwrap();

        assert_eq!(
            matrix.vocabulary,
            vec![
                "developer".to_string(),
                "python".to_string(),
                "python developer".to_string(),
            ]
        );
    }

    #[test]
    fn max_features_caps_vocabulary_by_corpus_frequency() {
        let docs = vec!["aa aa aa bb bb cc".to_string()];
        let matrix = TfidfVectorizer::new(2, (1, 1)).fit_transform(&docs).unwrap();

        assert_eq!(matrix.vocabulary, vec!["aa".to_string(), "bb".to_string()]);
    }

    #[test]
    fn frequency_ties_break_lexicographically() {
        let docs = vec!["zz aa zz aa mm".to_string()];
        let matrix = TfidfVectorizer::new(3, (1, 1)).fit_transform(&docs).unwrap();

        // aa=2, zz=2, mm=1 → 全部入る。上限2なら aa/zz が残る
        let capped = TfidfVectorizer::new(2, (1, 1)).fit_transform(&docs).unwrap();
        assert_eq!(capped.vocabulary, vec!["aa".to_string(), "zz".to_string()]);
        assert_eq!(matrix.vocabulary.len(), 3);
    }

    #[test]
    fn rare_terms_weigh_more_than_ubiquitous_ones() {
        let docs = vec![
            "python rust".to_string(),
            "python sql".to_string(),
            "python cobol".to_string(),
        ];
        let matrix = TfidfVectorizer::new(5000, (1, 1)).fit_transform(&docs).unwrap();

        let python_col = matrix.vocabulary.iter().position(|t| t == "python").unwrap();
        let rust_col = matrix.vocabulary.iter().position(|t| t == "rust").unwrap();

        // row 0 内では全語 tf=1 なので、df の低い rust の重みが python を上回る
        assert!(matrix.row(0)[rust_col] > matrix.row(0)[python_col]);
    }

    #[test]
    fn document_without_vocabulary_terms_gets_zero_row() {
        let docs = vec!["python sql".to_string(), String::new()];
        let matrix = vectorizer().fit_transform(&docs).unwrap();

        assert!(matrix.row(1).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn all_empty_corpus_is_an_error() {
        let docs = vec![String::new(), String::new()];
        assert_eq!(
            vectorizer().fit_transform(&docs).unwrap_err(),
            VectorizeError::EmptyVocabulary
        );
    }

    #[test]
    fn refit_per_call_keeps_runs_independent() {
        let v = vectorizer();
        let first = v.fit_transform(&["python sql".to_string()]).unwrap();
        let second = v.fit_transform(&["rust tokio".to_string()]).unwrap();

        assert_ne!(first.vocabulary, second.vocabulary);
    }
}
