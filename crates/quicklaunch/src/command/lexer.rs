//! Tokenizer for the structured launch syntax.
//!
//! Input is split on whitespace and each word is classified by its first
//! character:
//! - `#name` tag
//! - `@name` view
//! - `+ ^ * =` run of mode sigils; whatever follows the run is lexed again
//! - anything else is a word of the app command line

use thiserror::Error;

use super::types::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Tag(&'a str),
    View(&'a str),
    Modes(Vec<Mode>),
    Word(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("line breaks are not allowed")]
    LineBreak,
    #[error("missing name after '{0}'")]
    EmptyName(char),
    #[error("invalid name in token {0}")]
    InvalidName(String),
}

pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    if input.contains(&['\n', '\r'][..]) {
        return Err(LexError::LineBreak);
    }
    let mut tokens = Vec::new();
    for word in input.split_whitespace() {
        lex_word(word, &mut tokens)?;
    }
    Ok(tokens)
}

fn lex_word<'a>(word: &'a str, tokens: &mut Vec<Token<'a>>) -> Result<(), LexError> {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return Ok(());
    };
    match first {
        '#' | '@' => {
            let name = chars.as_str();
            if name.is_empty() {
                return Err(LexError::EmptyName(first));
            }
            if !is_valid_name(name) {
                return Err(LexError::InvalidName(word.to_string()));
            }
            tokens.push(if first == '#' {
                Token::Tag(name)
            } else {
                Token::View(name)
            });
        }
        _ if Mode::is_sigil(first) => {
            let split = word.find(|c: char| !Mode::is_sigil(c)).unwrap_or(word.len());
            let (sigils, rest) = word.split_at(split);
            tokens.push(Token::Modes(sigils.chars().filter_map(Mode::from_sigil).collect()));
            lex_word(rest, tokens)?;
        }
        _ => tokens.push(Token::Word(word)),
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
