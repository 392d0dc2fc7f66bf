use std::fs;
use std::path::{Path, PathBuf};

/// Three games by two White players, with commentary, NAGs and variations.
pub const REPERTOIRE_PGN: &str = r#"[Event "Training"]
[Site "?"]
[White "Kasparov"]
[Black "Student"]
[Result "1-0"]

1. Nf3 {flexible} c5 (1... b6 2. d4) 2. e4 $1 1-0

[Event "Training"]
[Site "?"]
[White "Karpov"]
[Black "Student"]
[Result "*"]

1. e4 c5 {the Sicilian} 2. Nf3 d6 (2... Nc6 3. d4) *

[Event "Training"]
[Site "?"]
[White "Kasparov"]
[Black "Other"]
[Result "0-1"]

1. Nf3 c5 2. c4 {symmetrical}
Nc6 0-1
"#;

#[allow(dead_code)]
/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
