//! Line-oriented output of word lists.

use crate::error::Result;
use crate::load::load_file;
use crate::model::{ConversionStats, WordList};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write every word on its own line and return the statistics.
///
/// Each word is written verbatim followed by `\n`. The writer is flushed
/// before returning.
///
/// # Example
///
/// ```
/// use wordlist::{write_words, WordList};
///
/// let list = WordList::with_words("english", ["a", "bb", "ccc"]);
/// let mut out = Vec::new();
/// let stats = write_words(&list, &mut out)?;
///
/// assert_eq!(out, b"a\nbb\nccc\n");
/// assert_eq!(stats.max_len, 3);
/// # Ok::<(), wordlist::Error>(())
/// ```
pub fn write_words<W: Write>(list: &WordList, mut writer: W) -> Result<ConversionStats> {
    let mut stats = ConversionStats::new();

    for word in list.iter() {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
        stats.record(word);
    }
    writer.flush()?;

    tracing::trace!(
        words = stats.word_count,
        max_len = stats.max_len,
        "words written"
    );
    Ok(stats)
}

impl WordList {
    /// Statistics for this list without writing anything.
    pub fn stats(&self) -> ConversionStats {
        ConversionStats::from_words(self.iter())
    }
}

/// Create or truncate `output` and write the list to it.
pub fn write_file(list: &WordList, output: impl AsRef<Path>) -> Result<ConversionStats> {
    let output = output.as_ref();
    tracing::debug!(output = %output.display(), "writing words");

    let file = File::create(output)?;
    write_words(list, BufWriter::new(file))
}

/// Convert a JSON word list file into a plain text file.
///
/// The input is loaded and validated before `output` is touched; the output
/// is then created or truncated.
///
/// # Example
///
/// ```no_run
/// use wordlist::{convert_file, DEFAULT_OUTPUT};
///
/// let (list, stats) = convert_file("english.json", DEFAULT_OUTPUT)?;
/// println!("{}: max word length {}", list.name, stats.max_len);
/// # Ok::<(), wordlist::Error>(())
/// ```
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<(WordList, ConversionStats)> {
    let list = load_file(input)?;
    let stats = write_file(&list, output)?;
    Ok((list, stats))
}
