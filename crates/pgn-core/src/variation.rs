//! Unwinds nested variations into linear move lines.

use serde::Serialize;

use crate::error::VariationError;
use crate::token::{tokenize, Token};

/// One half-move with the annotations that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ply {
    pub symbol: String,
    pub annotations: Vec<String>,
}

impl Ply {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            annotations: Vec::new(),
        }
    }
}

/// A linear sequence of plies from the starting position.
pub type Line = Vec<Ply>;

/// Stack-based variation parser.
///
/// Every `(` snapshots the current line and backs up one ply, every `)` emits
/// the finished alternative and restores the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariationParser {
    strict: bool,
}

impl VariationParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// In strict mode an unclosed `(` is an error instead of being ignored.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse a token stream into lines, main continuation first.
    ///
    /// Empty lines carry no plies and are left out, so an empty stream yields
    /// no lines at all. An annotation must follow a move of the line it sits
    /// in; one placed directly after `(` is rejected.
    pub fn parse(&self, tokens: &[Token]) -> Result<Vec<Line>, VariationError> {
        let mut lines: Vec<Line> = Vec::new();
        let mut current: Line = Vec::new();
        // Snapshot plus the position of the `(` that took it.
        let mut saved: Vec<(Line, usize)> = Vec::new();
        // Set by `(` until the variation's first move.
        let mut after_open = false;

        for (position, token) in tokens.iter().enumerate() {
            match token {
                Token::Move(symbol) => {
                    current.push(Ply::new(symbol));
                    after_open = false;
                }
                Token::Annotation(annotation) => match current.last_mut() {
                    Some(ply) if !after_open => ply.annotations.push(annotation.clone()),
                    _ => {
                        return Err(VariationError::AnnotationWithoutMove {
                            annotation: annotation.clone(),
                            position,
                        })
                    }
                },
                Token::Open => {
                    saved.push((current.clone(), position));
                    // The variation replaces the move just played.
                    current.pop();
                    after_open = true;
                }
                Token::Close => {
                    let (restored, _) = saved
                        .pop()
                        .ok_or(VariationError::UnexpectedClose { position })?;
                    let finished = std::mem::replace(&mut current, restored);
                    after_open = false;
                    if !finished.is_empty() {
                        lines.push(finished);
                    }
                }
            }
        }

        if let Some((_, position)) = saved.first() {
            if self.strict {
                return Err(VariationError::UnbalancedVariation { position: *position });
            }
            tracing::debug!(
                open = saved.len(),
                position,
                "Ignoring unclosed variations"
            );
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines.reverse();
        Ok(lines)
    }
}

/// Tokenize a movetext block and split it into lines with the default parser.
pub fn split_game_to_lines(block: &str) -> Result<Vec<Line>, VariationError> {
    VariationParser::new().parse(&tokenize(block))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(lines: &[Line]) -> Vec<Vec<&str>> {
        lines
            .iter()
            .map(|line| line.iter().map(|p| p.symbol.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_split_reference_game() {
        let lines = split_game_to_lines("1. Nf3 ( 1. e4 c5 ) c5 ( b6 2. d4 ) *").unwrap();
        assert_eq!(
            symbols(&lines),
            vec![vec!["Nf3", "c5"], vec!["Nf3", "b6", "d4"], vec!["e4", "c5"]]
        );
    }

    #[test]
    fn test_split_without_variations() {
        let lines = split_game_to_lines("1. e4 e5 2. Nf3 1-0").unwrap();
        assert_eq!(symbols(&lines), vec![vec!["e4", "e5", "Nf3"]]);
    }

    #[test]
    fn test_split_nested_variations() {
        // 1. e4 e5 (1... c5 2. Nf3 (2. c3 d5) d6) 2. Nf3
        let lines =
            split_game_to_lines("1. e4 e5 ( 1... c5 2. Nf3 ( 2. c3 d5 ) d6 ) 2. Nf3 *").unwrap();
        assert_eq!(
            symbols(&lines),
            vec![
                vec!["e4", "e5", "Nf3"],
                vec!["e4", "c5", "Nf3", "d6"],
                vec!["e4", "c5", "c3", "d5"],
            ]
        );
    }

    #[test]
    fn test_split_empty_block() {
        assert!(split_game_to_lines("*").unwrap().is_empty());
        assert!(split_game_to_lines("").unwrap().is_empty());
    }

    #[test]
    fn test_annotations_attach_to_preceding_move() {
        let lines = split_game_to_lines("1. e4 $1 e5 $2 $10 ( 1... c5 $6 ) *").unwrap();
        assert_eq!(lines[0][0].annotations, vec!["$1"]);
        assert_eq!(lines[0][1].annotations, vec!["$2", "$10"]);
        assert_eq!(lines[1][0].annotations, vec!["$1"]);
        assert_eq!(lines[1][1].symbol, "c5");
        assert_eq!(lines[1][1].annotations, vec!["$6"]);
    }

    #[test]
    fn test_annotation_without_move_fails() {
        let err = split_game_to_lines("$1 1. e4 *").unwrap_err();
        assert_eq!(
            err,
            VariationError::AnnotationWithoutMove {
                annotation: "$1".into(),
                position: 0
            }
        );
    }

    #[test]
    fn test_annotation_after_first_ply_variation_fails() {
        let err = split_game_to_lines("1. e4 ( $2 1. d4 ) *").unwrap_err();
        assert_eq!(
            err,
            VariationError::AnnotationWithoutMove {
                annotation: "$2".into(),
                position: 2
            }
        );
    }

    #[test]
    fn test_annotation_opening_variation_fails() {
        let err = split_game_to_lines("1. e4 e5 ( $1 1... c5 ) *").unwrap_err();
        assert_eq!(
            err,
            VariationError::AnnotationWithoutMove {
                annotation: "$1".into(),
                position: 3
            }
        );
    }

    #[test]
    fn test_annotation_after_close_stays_on_restored_line() {
        let lines = split_game_to_lines("1. e4 e5 ( 1... c5 ) $2 2. Nf3 *").unwrap();
        assert_eq!(symbols(&lines), vec![vec!["e4", "e5", "Nf3"], vec!["e4", "c5"]]);
        assert_eq!(lines[0][1].annotations, vec!["$2"]);
        assert!(lines[1][0].annotations.is_empty());
    }

    #[test]
    fn test_empty_variation() {
        let lines = split_game_to_lines("1. e4 e5 ( ) 2. Nf3 *").unwrap();
        // The empty alternative leaves only the prefix before the replaced move.
        assert_eq!(symbols(&lines), vec![vec!["e4", "e5", "Nf3"], vec!["e4"]]);
        assert_eq!(crate::serialize::merge_lines(&lines), "1. e4 e5 2. Nf3 ");

        let lines = split_game_to_lines("1. e4 ( ) e5 *").unwrap();
        assert_eq!(symbols(&lines), vec![vec!["e4", "e5"]]);
    }

    #[test]
    fn test_unexpected_close_fails() {
        let err = split_game_to_lines("1. e4 ) e5 *").unwrap_err();
        assert_eq!(err, VariationError::UnexpectedClose { position: 1 });
    }

    #[test]
    fn test_unclosed_variation_tolerated() {
        let lines = split_game_to_lines("1. e4 e5 ( 1... c5 2. Nf3 *").unwrap();
        // The dangling snapshot is never popped; only the open line surfaces.
        assert_eq!(symbols(&lines), vec![vec!["e4", "c5", "Nf3"]]);
    }

    #[test]
    fn test_unclosed_variation_strict() {
        let tokens = tokenize("1. e4 e5 ( 1... c5 ( 1... e6 ) *");
        let err = VariationParser::new().strict(true).parse(&tokens).unwrap_err();
        assert_eq!(err, VariationError::UnbalancedVariation { position: 2 });
    }

    #[test]
    fn test_snapshots_are_independent() {
        let lines = split_game_to_lines("1. e4 e5 ( 1... c5 ) ( 1... e6 ) 2. Nf3 *").unwrap();
        assert_eq!(
            symbols(&lines),
            vec![vec!["e4", "e5", "Nf3"], vec!["e4", "e6"], vec!["e4", "c5"]]
        );
    }
}
