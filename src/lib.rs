//! # wordlist
//!
//! Convert Monkeytype JSON word lists into plain `words.txt` datasets.
//!
//! A word list is a JSON object with a `name` and an ordered `words` array.
//! Conversion writes every word on its own line and reports the longest
//! word, which decides whether the typing test can use every entry.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wordlist::{convert_file, DEFAULT_OUTPUT};
//!
//! let (list, stats) = convert_file("english.json", DEFAULT_OUTPUT)?;
//! println!("Converting {}...", list.name);
//! println!("Max word length: {}", stats.max_len);
//! # Ok::<(), wordlist::Error>(())
//! ```
//!
//! ## Working in memory
//!
//! ```
//! use wordlist::{write_words, WordList};
//!
//! let list = WordList::from_json_str(r#"{"name":"english","words":["a","bb"]}"#)?;
//! let mut out = Vec::new();
//! write_words(&list, &mut out)?;
//! assert_eq!(out, b"a\nbb\n");
//! # Ok::<(), wordlist::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod load;
pub mod model;

// Re-exports
pub use convert::{convert_file, write_file, write_words};
pub use error::{Error, Result};
pub use load::load_file;
pub use model::{ConversionStats, Metadata, WordList, SPLIT_WORD_LEN};

/// Output file written by the `convert` tool, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "words.txt";
