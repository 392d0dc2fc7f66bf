//! Grouping games into chapters and merging each chapter into one tree.

use std::str::FromStr;

use pgn_core::game_data::GameRecord;
use pgn_core::{Line, VariationParser, VariationTree};

use crate::error::MergeError;

/// Rule for cutting a file's games into chapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splitter {
    /// One chapter per White player, in first-seen order.
    White,
    /// One chapter per Black player, in first-seen order.
    Black,
    /// Every game in a single chapter.
    All,
    /// Consecutive chapters of the given sizes; leftover games are ignored.
    Counts(Vec<usize>),
}

impl FromStr for Splitter {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "w" => return Ok(Splitter::White),
            "b" => return Ok(Splitter::Black),
            "a" => return Ok(Splitter::All),
            _ => {}
        }

        let counts: Result<Vec<usize>, _> =
            trimmed.split(':').map(|part| part.trim().parse::<usize>()).collect();
        counts
            .map(Splitter::Counts)
            .map_err(|_| MergeError::InvalidSplitter(s.to_string()))
    }
}

/// Games that share one output section.
#[derive(Debug, Clone, Default)]
pub struct Chapter {
    /// Player name for player-grouped chapters.
    pub label: Option<String>,
    pub games: Vec<GameRecord>,
}

/// Result of merging a chapter.
#[derive(Debug, Clone)]
pub struct MergedChapter {
    pub label: Option<String>,
    pub game_count: usize,
    pub tree: VariationTree,
}

impl MergedChapter {
    pub fn movetext(&self) -> String {
        pgn_core::serialize(&self.tree)
    }
}

/// Cut the games into chapters. The records are cloned so the caller keeps
/// the full list, leftovers of a `Counts` split included.
pub fn group_games(games: &[GameRecord], splitter: &Splitter) -> Result<Vec<Chapter>, MergeError> {
    match splitter {
        Splitter::All => Ok(vec![Chapter {
            label: None,
            games: games.to_vec(),
        }]),
        Splitter::Counts(counts) => {
            let needed: usize = counts.iter().sum();
            if games.len() < needed {
                return Err(MergeError::NotEnoughGames {
                    needed,
                    available: games.len(),
                });
            }
            let mut remaining = games.iter().cloned();
            Ok(counts
                .iter()
                .map(|&n| Chapter {
                    label: None,
                    games: remaining.by_ref().take(n).collect(),
                })
                .collect())
        }
        Splitter::White | Splitter::Black => {
            let header = if *splitter == Splitter::White { "White" } else { "Black" };
            let mut chapters: Vec<Chapter> = Vec::new();

            for (index, game) in games.iter().enumerate() {
                // An empty tag value is still a group, only an absent tag fails.
                let player = game
                    .tag(header)
                    .ok_or(MergeError::MissingPlayer { index, header })?;
                match chapters.iter_mut().find(|c| c.label.as_deref() == Some(player.as_str())) {
                    Some(chapter) => chapter.games.push(game.clone()),
                    None => chapters.push(Chapter {
                        label: Some(player),
                        games: vec![game.clone()],
                    }),
                }
            }

            Ok(chapters)
        }
    }
}

/// Split every game of the chapter into lines, in game order, and merge them.
pub fn merge_chapter(chapter: &Chapter, parser: &VariationParser) -> Result<MergedChapter, MergeError> {
    let mut lines: Vec<Line> = Vec::new();
    for (index, game) in chapter.games.iter().enumerate() {
        let tokens = pgn_core::tokenize(&game.movetext());
        let game_lines = parser
            .parse(&tokens)
            .map_err(|source| MergeError::Variation { index, source })?;
        lines.extend(game_lines);
    }

    Ok(MergedChapter {
        label: chapter.label.clone(),
        game_count: chapter.games.len(),
        tree: VariationTree::from_lines(&lines),
    })
}
