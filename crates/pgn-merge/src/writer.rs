//! Chapter output: placeholder headers plus merged movetext.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use pgn_core::game_data::GameRecord;

use crate::chapter::Chapter;
use crate::error::MergeError;

const LINE_END: &str = "\r\n";

/// Seven-tag roster for one chapter, CRLF terminated.
pub fn chapter_header(number: usize) -> String {
    [
        r#"[Event "?"]"#.to_string(),
        r#"[Site "?"]"#.to_string(),
        r#"[Date "????.??.??"]"#.to_string(),
        r#"[Round "?"]"#.to_string(),
        format!(r#"[White "Chapter {number}"]"#),
        r#"[Black "?"]"#.to_string(),
        r#"[Result "*"]"#.to_string(),
    ]
    .iter()
    .map(|tag| format!("{tag}{LINE_END}"))
    .collect()
}

/// Render merged movetexts as one PGN document, chapters numbered from 1.
pub fn render_chapters<S: AsRef<str>>(movetexts: &[S]) -> String {
    movetexts
        .iter()
        .enumerate()
        .map(|(i, movetext)| {
            format!(
                "{}{LINE_END}{}  *  {LINE_END}{LINE_END}",
                chapter_header(i + 1),
                movetext.as_ref()
            )
        })
        .collect()
}

fn input_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "games".to_string())
}

/// `<stem>_edited.pgn` next to the working directory.
pub fn default_output_name(input: &Path) -> PathBuf {
    PathBuf::from(format!("{}_edited.pgn", input_stem(input)))
}

/// `<stem>_cleaned.pgn`; never the same name as the merged output.
pub fn cleaned_output_name(input: &Path) -> PathBuf {
    PathBuf::from(format!("{}_cleaned.pgn", input_stem(input)))
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), MergeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MergeError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| MergeError::io(path, e))?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Write the commentary-free games: every game of the input in one file, then
/// one file per chapter.
pub fn write_cleaned(
    dir: &Path,
    input: &Path,
    games: &[GameRecord],
    chapters: &[Chapter],
) -> Result<(), MergeError> {
    let all: String = games.iter().map(|g| g.pgn.as_str()).collect();
    write_file(&dir.join(cleaned_output_name(input)), &all)?;

    for (i, chapter) in chapters.iter().enumerate() {
        let text: String = chapter.games.iter().map(|g| g.pgn.as_str()).collect();
        write_file(&dir.join(format!("Chapter {}.pgn", i + 1)), &text)?;
    }
    Ok(())
}
