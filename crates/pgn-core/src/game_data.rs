use serde::Serialize;

use crate::pgn::{extract_header, find_header, is_header_line};

/// One game as cut from a multi-game file, braced commentary already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub pgn: String,
}

impl GameRecord {
    pub fn new(pgn: impl Into<String>) -> Self {
        Self { pgn: pgn.into() }
    }

    /// Everything but the tag pairs.
    pub fn movetext(&self) -> String {
        self.pgn
            .lines()
            .filter(|line| !is_header_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn header(&self, name: &str) -> Option<String> {
        extract_header(&self.pgn, name)
    }

    /// Like `header`, but a present tag with an empty value is `Some("")`.
    pub fn tag(&self, name: &str) -> Option<String> {
        find_header(&self.pgn, name)
    }

    pub fn white(&self) -> Option<String> {
        self.header("White")
    }

    pub fn black(&self) -> Option<String> {
        self.header("Black")
    }
}
