//! Movetext tokenizer.
//!
//! Cleans one game's movetext (headers already removed) and classifies what is
//! left into moves, variation delimiters and `$N` annotations.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Sigil that starts a numeric annotation glyph (NAG).
pub const ANNOTATION_SIGIL: char = '$';

/// Game termination markers; the last token of a block is one of these.
pub const RESULT_MARKERS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

static LONG_CASTLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)o-o-o").unwrap());
static SHORT_CASTLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)o-o").unwrap());
static MOVE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\.(?:\.\.)?").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    Move(String),
    Open,
    Close,
    Annotation(String),
}

impl Token {
    fn classify(raw: &str) -> Self {
        match raw {
            "(" => Token::Open,
            ")" => Token::Close,
            _ if raw.starts_with(ANNOTATION_SIGIL) => Token::Annotation(raw.to_string()),
            _ => Token::Move(raw.to_string()),
        }
    }
}

pub fn is_result_marker(raw: &str) -> bool {
    RESULT_MARKERS.contains(&raw)
}

/// Tokenize one game's movetext.
///
/// Parentheses are split off adjacent symbols, castling is normalized to the
/// `0-0` / `0-0-0` spelling and move numbers are dropped, since tree depth
/// carries the same information. A trailing result marker is discarded.
pub fn tokenize(block: &str) -> Vec<Token> {
    let spaced = block.replace('(', " ( ").replace(')', " )");

    // Long form first, otherwise "O-O-O" would become "0-0-O".
    let castled = LONG_CASTLE_RE.replace_all(&spaced, "0-0-0");
    let castled = SHORT_CASTLE_RE.replace_all(&castled, "0-0");

    let unnumbered = MOVE_NUMBER_RE.replace_all(&castled, " ");

    let mut raw: Vec<&str> = unnumbered.split_whitespace().collect();
    if raw.last().is_some_and(|last| is_result_marker(last)) {
        raw.pop();
    }

    let tokens: Vec<Token> = raw.into_iter().map(Token::classify).collect();
    tracing::trace!(count = tokens.len(), "Tokenized movetext");
    tokens
}
