//! Loading word lists from JSON.

use crate::error::{Error, Result};
use crate::model::{Metadata, WordList};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// On-disk shape before word validation.
///
/// Metadata keys stay inline: `#[serde(flatten)]` buffers the whole document.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWordList {
    name: String,
    words: Vec<Value>,
    #[serde(default)]
    right_to_left: bool,
    #[serde(default)]
    ordered_by_frequency: bool,
    #[serde(default)]
    no_lazy_mode: bool,
    #[serde(default)]
    ligatures: bool,
    #[serde(default)]
    bcp47: Option<String>,
}

impl TryFrom<RawWordList> for WordList {
    type Error = Error;

    fn try_from(raw: RawWordList) -> Result<Self> {
        let words = raw
            .words
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::String(word) => Ok(word),
                other => Err(Error::InvalidWord {
                    index,
                    found: json_type_name(&other),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WordList {
            name: raw.name,
            words,
            metadata: Metadata {
                right_to_left: raw.right_to_left,
                ordered_by_frequency: raw.ordered_by_frequency,
                no_lazy_mode: raw.no_lazy_mode,
                ligatures: raw.ligatures,
                bcp47: raw.bcp47,
            },
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl WordList {
    /// Parse a word list from a JSON string.
    ///
    /// # Example
    ///
    /// ```
    /// use wordlist::WordList;
    ///
    /// let list = WordList::from_json_str(r#"{"name":"english","words":["a","bb"]}"#)?;
    /// assert_eq!(list.name, "english");
    /// assert_eq!(list.len(), 2);
    /// # Ok::<(), wordlist::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawWordList = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Parse a word list from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawWordList = serde_json::from_reader(reader)?;
        raw.try_into()
    }
}

/// Load a word list from a JSON file.
///
/// # Example
///
/// ```no_run
/// use wordlist::load_file;
///
/// let list = load_file("english.json")?;
/// println!("{}: {} words", list.name, list.len());
/// # Ok::<(), wordlist::Error>(())
/// ```
pub fn load_file(path: impl AsRef<Path>) -> Result<WordList> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading word list");

    let file = File::open(path)?;
    let list = WordList::from_reader(BufReader::new(file))?;

    tracing::debug!(name = %list.name, words = list.len(), "word list loaded");
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let list = WordList::from_json_str(r#"{"name":"english","words":["a","bb","ccc"]}"#)
            .unwrap();
        assert_eq!(list.name, "english");
        assert_eq!(list.words, vec!["a", "bb", "ccc"]);
        assert_eq!(list.metadata, Metadata::default());
    }

    #[test]
    fn test_parse_metadata() {
        let json = r#"{
            "name": "hebrew",
            "rightToLeft": true,
            "orderedByFrequency": true,
            "bcp47": "he-IL",
            "words": ["של"]
        }"#;
        let list = WordList::from_json_str(json).unwrap();
        assert!(list.metadata.right_to_left);
        assert!(list.metadata.ordered_by_frequency);
        assert!(!list.metadata.no_lazy_mode);
        assert_eq!(list.metadata.bcp47.as_deref(), Some("he-IL"));
    }

    #[test]
    fn test_metadata_after_words() {
        let json = r#"{"words":["a","b"],"name":"thai","ligatures":true,"noLazyMode":true}"#;
        let list = WordList::from_json_str(json).unwrap();
        assert_eq!(list.name, "thai");
        assert_eq!(list.words, vec!["a", "b"]);
        assert!(list.metadata.ligatures);
        assert!(list.metadata.no_lazy_mode);
        assert_eq!(list.metadata.bcp47, None);
    }

    #[test]
    fn test_metadata_wrong_type() {
        let json = r#"{"name":"x","words":[],"rightToLeft":"yes"}"#;
        let err = WordList::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let json = r#"{"name":"x","words":[],"additionalAccents":[["a","b"]]}"#;
        let list = WordList::from_json_str(json).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_missing_words() {
        let err = WordList::from_json_str(r#"{"name":"english"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(ref msg) if msg.contains("words")));
    }

    #[test]
    fn test_missing_name() {
        let err = WordList::from_json_str(r#"{"words":["a"]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(ref msg) if msg.contains("name")));
    }

    #[test]
    fn test_not_an_object() {
        let err = WordList::from_json_str(r#"["a","b"]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = WordList::from_json_str(r#"{"name":"english","words":["a""#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_non_string_word() {
        let err = WordList::from_json_str(r#"{"name":"x","words":["a",7,null]}"#).unwrap_err();
        match err {
            Error::InvalidWord { index, found } => {
                assert_eq!(index, 1);
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_words_not_array() {
        let err = WordList::from_json_str(r#"{"name":"x","words":"abc"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_reader() {
        let data = br#"{"name":"english","words":["the"]}"#;
        let list = WordList::from_reader(&data[..]).unwrap();
        assert_eq!(list.words, vec!["the"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file("does-not-exist.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
