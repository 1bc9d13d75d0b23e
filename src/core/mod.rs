//! Core parsing pipeline for quickcap.
//!
//! Three stages run in fixed order: tag extraction, date expression
//! matching, then whitespace cleanup. `parse` in [`parser`] is the one
//! entry point callers should use.

mod parser;
mod rules;
mod tags;
mod timeofday;

pub use parser::{parse, ParsedTask};
pub use rules::match_date_expression;
pub use tags::extract_tags;
pub use timeofday::{apply_time, Meridiem};
