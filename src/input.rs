use std::io::Read;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::Result;
use crate::model::Candidate;

/// Expands glob patterns into the candidate files they match, in pattern order.
pub fn discover_candidate_files(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        for entry in glob(pattern)? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Error reading glob entry: {}", e);
                }
            }
        }
    }
    Ok(files)
}

/// Parses a JSON array of candidates.
pub fn parse_candidates(json: &str) -> Result<Vec<Candidate>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_candidate_file(path: &Path) -> Result<Vec<Candidate>> {
    let content = std::fs::read_to_string(path)?;
    let candidates = parse_candidates(&content)?;
    log::debug!("Loaded {} candidates from {:?}", candidates.len(), path);
    Ok(candidates)
}

/// Loads every candidate reachable from `patterns`. A pattern of `-` reads
/// stdin. Files that fail to parse are skipped with a warning.
pub fn load_candidates(patterns: &[String]) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    if patterns.iter().any(|p| p == "-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        candidates.extend(parse_candidates(&buf)?);
    }

    let file_patterns: Vec<String> = patterns.iter().filter(|p| *p != "-").cloned().collect();
    for path in discover_candidate_files(&file_patterns)? {
        match load_candidate_file(&path) {
            Ok(loaded) => candidates.extend(loaded),
            Err(e) => log::warn!("Skipping {:?}: {}", path, e),
        }
    }

    Ok(candidates)
}
