use std::collections::HashMap;
use std::sync::LazyLock;

/// 不規則複数形 → 単数形の辞書。
/// WordNet の exception list のうち履歴書で出現しやすいものを収録。
static IRREGULAR_NOUNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("analyses", "analysis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("curricula", "curriculum"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("appendices", "appendix"),
        ("schemas", "schema"),
        ("media", "medium"),
    ]
    .into_iter()
    .collect()
});

/// 名詞の語形を辞書形（単数形）に戻す。
///
/// 元実装が使っていた WordNet lemmatizer のデフォルト（名詞 POS）と同じ契約:
/// 複数形だけを畳み、動詞活用（running など）には手を付けない。
/// 不規則形は辞書、それ以外は WordNet 流の接尾辞 detachment 規則で処理する。
pub fn lemmatize(token: &str) -> String {
    if let Some(lemma) = IRREGULAR_NOUNS.get(token) {
        return (*lemma).to_string();
    }

    if let Some(stem) = token.strip_suffix("sses") {
        // classes -> class, processes -> process
        if !stem.is_empty() {
            return format!("{stem}ss");
        }
    }

    if let Some(stem) = token.strip_suffix("ies") {
        // technologies -> technology, ただし "ties" のような短語は ie 止まり
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }

    for (suffix, replacement) in [("ches", "ch"), ("shes", "sh"), ("xes", "x"), ("zes", "z")] {
        if let Some(stem) = token.strip_suffix(suffix) {
            if !stem.is_empty() {
                return format!("{stem}{replacement}");
            }
        }
    }

    if let Some(stem) = token.strip_suffix('s') {
        // "class" / "analysis" / "virus" 系は複数形ではないので剥がさない
        if stem.len() >= 3
            && !stem.ends_with('s')
            && !stem.ends_with('u')
            && !stem.ends_with('i')
        {
            return stem.to_string();
        }
    }

    token.to_string()
}
