//! Command classification (URL, web search, shell line, structured launch).

pub mod lexer;
pub mod parser;
pub mod types;
pub mod uri;

pub use parser::{classify, CommandParser};
pub use types::{Mode, ParsedCommand, StructuredLaunch};
pub use uri::SearchEngine;
