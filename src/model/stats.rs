//! Word statistics gathered during conversion.

use unicode_width::UnicodeWidthStr;

/// Word length at which the typing test corrupts its dataset.
///
/// The typing test reads `words.txt` with a 40-slot wide-character buffer,
/// so each read yields at most 39 characters. A 39-character word leaves its
/// newline behind and adds a stray empty word; anything longer is split into
/// 39-character pieces.
pub const SPLIT_WORD_LEN: usize = 39;

/// Summary of a converted word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Number of words written
    pub word_count: usize,

    /// Longest word length in characters (0 for an empty list)
    pub max_len: usize,

    /// First word reaching `max_len`
    pub longest: Option<String>,

    /// Widest word in terminal columns
    pub max_width: usize,

    /// Words at or above [`SPLIT_WORD_LEN`]
    pub overlong: usize,
}

impl ConversionStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute statistics over a sequence of words.
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stats = Self::new();
        for word in words {
            stats.record(word);
        }
        stats
    }

    /// Account for one more word.
    pub fn record(&mut self, word: &str) {
        let len = word.chars().count();

        self.word_count += 1;
        if self.longest.is_none() || len > self.max_len {
            self.max_len = len;
            self.longest = Some(word.to_string());
        }
        self.max_width = self.max_width.max(word.width());
        if len >= SPLIT_WORD_LEN {
            self.overlong += 1;
        }
    }

    /// Check if any word would be split by the typing test.
    pub fn has_overlong(&self) -> bool {
        self.overlong > 0
    }
}
