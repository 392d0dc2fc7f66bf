//! Shared-prefix variation tree built from linear move lines.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::variation::{Line, Ply};

/// One ply in the tree. `children[0]` is the main continuation, the rest are
/// alternatives in first-seen order; no two children share a symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveNode {
    pub symbol: String,
    pub annotations: Vec<String>,
    pub children: Vec<MoveNode>,
}

impl MoveNode {
    fn new(ply: &Ply) -> Self {
        Self {
            symbol: ply.symbol.clone(),
            annotations: ply.annotations.clone(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, symbol: &str) -> Option<&MoveNode> {
        self.children.iter().find(|c| c.symbol == symbol)
    }

    /// Follow `children[0]` down to a leaf.
    pub fn main_line(&self) -> impl Iterator<Item = &MoveNode> {
        std::iter::successors(self.children.first(), |node| node.children.first())
    }

    /// Descend into the child for `ply`, creating it at the end if missing.
    fn descend(&mut self, ply: &Ply) -> &mut MoveNode {
        let idx = match self.children.iter().position(|c| c.symbol == ply.symbol) {
            Some(idx) => {
                let existing = &mut self.children[idx];
                for annotation in &ply.annotations {
                    if !existing.annotations.contains(annotation) {
                        existing.annotations.push(annotation.clone());
                    }
                }
                idx
            }
            None => {
                self.children.push(MoveNode::new(ply));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    fn count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.count()).sum()
    }

    fn collect_paths<'a>(&'a self, prefix: &mut Vec<&'a str>, out: &mut Vec<Vec<String>>) {
        if self.children.is_empty() {
            if !prefix.is_empty() {
                out.push(prefix.iter().map(|s| s.to_string()).collect());
            }
            return;
        }
        for child in &self.children {
            prefix.push(&child.symbol);
            child.collect_paths(prefix, out);
            prefix.pop();
        }
    }
}

/// Variation tree rooted at a synthetic node with an empty symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariationTree {
    pub root: MoveNode,
}

impl VariationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge lines in order; earlier lines fix branch order.
    pub fn from_lines(lines: &[Line]) -> Self {
        let mut tree = Self::new();
        for line in lines {
            tree.insert_line(line);
        }
        tree
    }

    pub fn insert_line(&mut self, line: &[Ply]) {
        let mut current = &mut self.root;
        for ply in line {
            current = current.descend(ply);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of plies in the tree, root excluded.
    pub fn ply_count(&self) -> usize {
        self.root.count()
    }

    /// Root-to-leaf symbol paths in preorder.
    pub fn paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        self.root.collect_paths(&mut Vec::new(), &mut out);
        out
    }

    /// Convert the tree to JSON; children keep their branch order.
    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "children": self.root.children.iter().map(node_to_json).collect::<Vec<_>>(),
            "plies": self.ply_count(),
        })
    }
}

fn node_to_json(node: &MoveNode) -> JsonValue {
    let children: Vec<JsonValue> = node.children.iter().map(node_to_json).collect();

    serde_json::json!({
        "move": node.symbol,
        "annotations": node.annotations,
        "children": children,
    })
}
