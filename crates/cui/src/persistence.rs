use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted pointer press; replays go through the exact same dispatch
/// path as live input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptedClick {
    pub x: u16,
    pub y: u16,
    #[serde(default)]
    pub double: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ReplayScript {
    pub seed: Option<u64>,
    pub clicks: Vec<ScriptedClick>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReplayFile {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    clicks: Vec<ScriptedClick>,
}

pub fn load_replay_file(path: &Path) -> Result<ReplayScript> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read replay script {}", path.display()))?;
    parse_replay(&raw).with_context(|| format!("parse replay script {}", path.display()))
}

fn parse_replay(raw: &str) -> Result<ReplayScript> {
    let file: ReplayFile = serde_json::from_str(raw)?;
    Ok(ReplayScript {
        seed: file.seed,
        clicks: file.clicks,
    })
}
