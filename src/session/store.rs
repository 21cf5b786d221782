use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Flat level-key -> best-move-count map. The session writes strictly
/// decreasing values per key; everything else about durability is the
/// store's business.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<u32>;
    fn set(&mut self, key: &str, moves: u32);
    fn entries(&self) -> Vec<(String, u32)>;
    fn clear(&mut self);
}

#[derive(Default)]
pub struct MemoryScoreStore {
    scores: BTreeMap<String, u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.scores.get(key).copied()
    }

    fn set(&mut self, key: &str, moves: u32) {
        self.scores.insert(key.to_string(), moves);
    }

    fn entries(&self) -> Vec<(String, u32)> {
        self.scores.iter().map(|(k, &v)| (k.clone(), v)).collect()
    }

    fn clear(&mut self) {
        self.scores.clear();
    }
}

#[derive(Serialize, Deserialize, Default)]
struct ScoreFile {
    scores: BTreeMap<String, u32>,
}

/// Durable store backed by a small JSON file. Reads once at open, rewrites
/// the whole file on every change; a failed rewrite keeps the in-memory
/// scores and is only logged, the game keeps running.
pub struct JsonScoreStore {
    path: PathBuf,
    scores: BTreeMap<String, u32>,
}

impl JsonScoreStore {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let scores = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let file: ScoreFile = serde_json::from_str(&contents)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                file.scores
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, scores })
    }

    fn persist(&self) {
        let file = ScoreFile { scores: self.scores.clone() };
        let json = match serde_json::to_string_pretty(&file) {
            Ok(json) => json,
            Err(e) => {
                warn!("could not serialize scores: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            warn!("could not write scores to {}: {e}", self.path.display());
        }
    }
}

impl ScoreStore for JsonScoreStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.scores.get(key).copied()
    }

    fn set(&mut self, key: &str, moves: u32) {
        self.scores.insert(key.to_string(), moves);
        self.persist();
    }

    fn entries(&self) -> Vec<(String, u32)> {
        self.scores.iter().map(|(k, &v)| (k.clone(), v)).collect()
    }

    fn clear(&mut self) {
        self.scores.clear();
        self.persist();
    }
}
