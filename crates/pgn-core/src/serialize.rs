//! Renders a variation tree as numbered PGN movetext.
//!
//! Alternatives to a ply are written in parentheses right after the main
//! move, fully expanded, before the main line continues past that ply.

use crate::tree::{MoveNode, VariationTree};
use crate::variation::Line;

/// Full-move number and side to move for the ply about to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MoveClock {
    move_count: u32,
    white_to_move: bool,
}

impl MoveClock {
    const START: MoveClock = MoveClock {
        move_count: 0,
        white_to_move: true,
    };

    /// Clock for emitting the ply: White's ply opens a new full move.
    fn for_ply(self) -> Self {
        if self.white_to_move {
            Self {
                move_count: self.move_count + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Clock after the ply has been played.
    fn after_ply(self) -> Self {
        let clock = self.for_ply();
        Self {
            white_to_move: !clock.white_to_move,
            ..clock
        }
    }
}

fn ply_text(node: &MoveNode) -> String {
    let mut text = node.symbol.clone();
    for annotation in &node.annotations {
        text.push(' ');
        text.push_str(annotation);
    }
    text.push(' ');
    text
}

/// Continuation from `node` with `clock` describing its first child.
fn render_continuation(node: &MoveNode, clock: MoveClock) -> String {
    let Some((main, alternatives)) = node.children.split_first() else {
        return String::new();
    };

    let ply = clock.for_ply();
    let next = clock.after_ply();

    let mut out = String::new();
    if ply.white_to_move {
        out.push_str(&format!("{}. ", ply.move_count));
    }
    out.push_str(&ply_text(main));

    for alt in alternatives {
        out.push_str("( ");
        if ply.white_to_move {
            out.push_str(&format!("{}. ", ply.move_count));
        } else {
            out.push_str(&format!("{}... ", ply.move_count));
        }
        out.push_str(&ply_text(alt));
        out.push_str(&render_continuation(alt, next));
        out.push_str(") ");
    }

    out.push_str(&render_continuation(main, next));
    out
}

/// Serialize the whole tree. An empty tree yields an empty string.
pub fn serialize(tree: &VariationTree) -> String {
    render_continuation(&tree.root, MoveClock::START)
}

/// Merge lines into a tree and serialize it.
pub fn merge_lines(lines: &[Line]) -> String {
    serialize(&VariationTree::from_lines(lines))
}
