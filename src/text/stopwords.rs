//! Stop-word lists for English and Chinese text.
//!
//! Filtering is off by default. When a [`Tokenizer`](super::Tokenizer) is
//! given a list, matching tokens are dropped during tokenization, so the
//! vocabulary, the vectors, and the keywords never see them.

use std::collections::HashSet;

const ENGLISH: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
    "can", "need", "dare", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by",
    "from", "as", "into", "through", "during", "before", "after", "above", "below", "between",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "just", "and", "but", "if", "or", "because",
    "until", "while", "this", "that", "these", "those", "am", "it", "its", "he", "him", "she",
    "her", "they", "them", "his", "their", "my", "me", "your", "our", "what", "which", "who",
    "whom", "i", "you", "we", "about", "also", "new", "like", "many", "even",
];

const CHINESE: &[&str] = &[
    "的", "了", "是", "在", "我", "有", "和", "與", "就", "不", "人", "都", "一", "一個", "上",
    "也", "很", "到", "說", "要", "去", "你", "會", "著", "沒有", "看", "好", "自己", "這", "那",
    "來", "他", "她", "它", "們", "為", "以", "及", "等", "或", "但", "而", "如果", "因為",
    "所以", "雖然", "可以", "可能", "這個", "那個", "什麼", "怎麼", "為什麼", "從", "被", "對",
    "能", "還", "更", "最", "將", "讓", "給", "中", "下", "時", "後", "前",
];

/// Writing system of a text, as far as stop-word selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Text containing CJK unified ideographs.
    Cjk,
    /// Everything else.
    Latin,
}

impl Script {
    /// Classify `text`: any CJK ideograph makes it [`Script::Cjk`].
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_cjk) {
            Script::Cjk
        } else {
            Script::Latin
        }
    }
}

/// Whether `ch` lies in the CJK unified ideographs block.
#[inline]
pub(crate) fn is_cjk(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&ch)
}

/// A set of tokens to discard during tokenization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list (filters nothing).
    pub fn none() -> Self {
        Self::default()
    }

    /// Common English function words.
    pub fn english() -> Self {
        ENGLISH.iter().copied().collect()
    }

    /// Common Chinese function words and characters.
    pub fn chinese() -> Self {
        CHINESE.iter().copied().collect()
    }

    /// English and Chinese lists combined, for mixed-script corpora.
    pub fn builtin() -> Self {
        ENGLISH.iter().chain(CHINESE.iter()).copied().collect()
    }

    /// The built-in list matching `script`.
    pub fn for_script(script: Script) -> Self {
        match script {
            Script::Cjk => Self::chinese(),
            Script::Latin => Self::english(),
        }
    }

    /// Whether `token` is a stop word. Tokens are compared lowercased.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list filters nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}
