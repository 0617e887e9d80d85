//! Word list model.
//!
//! [`WordList`] is what the loader produces and the writer consumes;
//! [`ConversionStats`] is what a conversion reports back.

mod stats;
mod word_list;

pub use stats::*;
pub use word_list::*;
