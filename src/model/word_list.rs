//! Word list document structures.

/// Optional language flags found in Monkeytype language files.
///
/// None of these affect conversion; they are kept so callers can inspect
/// the list they loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Text is written right to left
    pub right_to_left: bool,

    /// Words are sorted from most to least frequent
    pub ordered_by_frequency: bool,

    /// Lazy mode (accent stripping) is unsupported for this language
    pub no_lazy_mode: bool,

    /// Script uses ligatures
    pub ligatures: bool,

    /// BCP 47 language tag
    pub bcp47: Option<String>,
}

/// A named, ordered list of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Declared language name (e.g. "english")
    pub name: String,

    /// Words in their original order
    pub words: Vec<String>,

    /// Optional language flags
    pub metadata: Metadata,
}

impl WordList {
    /// Create an empty word list with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a word list from a name and words.
    pub fn with_words<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
            metadata: Metadata::default(),
        }
    }

    /// Append a word.
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
