//! End-to-end merge run: read, split, group, merge, write.

use std::fs;

use pgn_core::pgn::split_games;
use pgn_core::VariationParser;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::chapter::{group_games, merge_chapter, MergedChapter};
use crate::config::{MergeConfig, OutputFormat};
use crate::error::MergeError;
use crate::writer::{render_chapters, write_cleaned, write_file};

/// Counts reported back to the caller after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub games: usize,
    pub chapters: usize,
    pub plies: usize,
}

#[derive(Serialize)]
struct ChapterJson<'a> {
    chapter: usize,
    label: Option<&'a str>,
    games: usize,
    movetext: String,
    tree: JsonValue,
}

fn render_json(merged: &[MergedChapter]) -> Result<String, MergeError> {
    let chapters: Vec<ChapterJson> = merged
        .iter()
        .enumerate()
        .map(|(i, m)| ChapterJson {
            chapter: i + 1,
            label: m.label.as_deref(),
            games: m.game_count,
            movetext: m.movetext(),
            tree: m.tree.to_json(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&chapters)?)
}

pub fn run(config: &MergeConfig) -> Result<RunSummary, MergeError> {
    let text = fs::read_to_string(&config.input).map_err(|e| MergeError::io(&config.input, e))?;

    let games = split_games(&text);
    info!(games = games.len(), input = %config.input.display(), "Read games");
    let game_count = games.len();

    let chapters = group_games(&games, &config.splitter)?;
    info!(chapters = chapters.len(), splitter = ?config.splitter, "Grouped games into chapters");

    let parser = VariationParser::new().strict(config.strict);
    let mut merged = Vec::with_capacity(chapters.len());
    for (i, chapter) in chapters.iter().enumerate() {
        let m = merge_chapter(chapter, &parser)?;
        debug!(
            chapter = i + 1,
            label = m.label.as_deref().unwrap_or("-"),
            games = m.game_count,
            plies = m.tree.ply_count(),
            "Merged chapter"
        );
        merged.push(m);
    }

    let plies: usize = merged.iter().map(|m| m.tree.ply_count()).sum();
    info!(plies, "Merged all chapters");

    let contents = match config.format {
        OutputFormat::Text => {
            let movetexts: Vec<String> = merged.iter().map(MergedChapter::movetext).collect();
            render_chapters(&movetexts)
        }
        OutputFormat::Json => render_json(&merged)?,
    };
    write_file(&config.output, &contents)?;

    if let Some(dir) = &config.cleaned_dir {
        write_cleaned(dir, &config.input, &games, &chapters)?;
    }

    Ok(RunSummary {
        games: game_count,
        chapters: merged.len(),
        plies,
    })
}
