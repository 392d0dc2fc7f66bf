//! PGN text utilities: cutting a file into games, stripping commentary and
//! reading tag pairs. Lightweight and regex-based; moves are never validated.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::game_data::GameRecord;

static HEADER_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\[.*".*"\]"#).unwrap());

pub fn is_header_line(line: &str) -> bool {
    HEADER_LINE_RE.is_match(line)
}

/// Removes `{...}` commentary; the open/closed state carries across lines.
#[derive(Debug, Default)]
struct CommentStripper {
    in_comment: bool,
}

impl CommentStripper {
    fn strip(&mut self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        for ch in line.chars() {
            match ch {
                '{' => self.in_comment = true,
                '}' => self.in_comment = false,
                _ if !self.in_comment => out.push(ch),
                _ => {}
            }
        }
        out
    }
}

fn has_content(game: &str) -> bool {
    !game.trim().is_empty()
}

/// Split a multi-game PGN into games.
///
/// A tag line that follows anything other than tag lines starts a new game.
/// Movetext lines lose their commentary and leading whitespace.
pub fn split_games(text: &str) -> Vec<GameRecord> {
    let mut games = Vec::new();
    let mut game = String::new();
    let mut in_headers = false;
    let mut stripper = CommentStripper::default();

    for line in text.split_inclusive('\n') {
        if is_header_line(line) {
            if !in_headers && has_content(&game) {
                games.push(GameRecord::new(std::mem::take(&mut game)));
            }
            in_headers = true;
            game.push_str(line);
        } else if line.trim().is_empty() {
            in_headers = false;
            game.push('\n');
        } else {
            in_headers = false;
            let cleaned = stripper.strip(line);
            let cleaned = cleaned.trim_start();
            game.push_str(cleaned);
            if !cleaned.is_empty() && !cleaned.ends_with('\n') {
                game.push('\n');
            }
        }
    }

    if has_content(&game) {
        games.push(GameRecord::new(game));
    }

    tracing::debug!(count = games.len(), "Split PGN into games");
    games
}

/// Trimmed value of a tag pair, `Some("")` when the tag is present but empty.
pub fn find_header(pgn: &str, header_name: &str) -> Option<String> {
    let pattern = format!(r#"\[{}\s+"([^"]*)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    Some(re.captures(pgn)?.get(1)?.as_str().trim().to_string())
}

/// Extract a string value from a PGN header (e.g. White, Black).
pub fn extract_header(pgn: &str, header_name: &str) -> Option<String> {
    find_header(pgn, header_name).filter(|value| !value.is_empty())
}
