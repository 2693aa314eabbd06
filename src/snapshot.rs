use crate::error::Result;
use crate::stats::StatsSnapshot;
use std::fs;
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "github_stats.json";

/// `<repository root>/public/data`, where the site picks the file up.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("public")
        .join("data")
}

/// Write the snapshot as indented JSON into `dir`, replacing any previous file.
pub fn write(dir: &Path, snapshot: &StatsSnapshot) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(FILE_NAME);
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;

    Ok(path)
}

pub fn read(path: &Path) -> Result<StatsSnapshot> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}
