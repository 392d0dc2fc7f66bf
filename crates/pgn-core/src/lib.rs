//! Variation-tree engine for PGN movetext.
//!
//! Movetext flows through four pure stages: [`token::tokenize`] classifies the
//! raw text, [`variation::VariationParser`] unwinds nested variations into
//! linear lines, [`tree::VariationTree`] merges the lines on shared prefixes,
//! and [`serialize::serialize`] renders the tree back to numbered notation.

pub mod error;
pub mod game_data;
pub mod pgn;
pub mod serialize;
pub mod token;
pub mod tree;
pub mod variation;

pub use error::VariationError;
pub use serialize::{merge_lines, serialize};
pub use token::{tokenize, Token};
pub use tree::{MoveNode, VariationTree};
pub use variation::{split_game_to_lines, Line, Ply, VariationParser};
