//! Lazily loaded, session-scoped cache of the static JSON data

use crate::table::{ManeuverTable, ZoneMap};
use std::cell::Cell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Path of the global zone map, relative to the data root
pub const ZONES_PATH: &str = "data/zones.json";

/// Path of a ship's maneuver table, relative to the data root
pub fn maneuver_path(ship: &str) -> String {
    format!("data/{}.json", ship)
}

/// Static data could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to load {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Where static files come from
pub trait DataSource {
    /// Fetch the file at a root-relative path
    fn fetch(&self, path: &str) -> Result<String, LoadError>;
}

/// Reads files under a base directory
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSource { root: root.into() }
    }
}

impl DataSource for FsSource {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        fs::read_to_string(self.root.join(path)).map_err(|source| LoadError::Fetch {
            path: path.to_string(),
            source,
        })
    }
}

/// In-memory files, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl DataSource for MemorySource {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.files.get(path).cloned().ok_or_else(|| LoadError::Fetch {
            path: path.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        })
    }
}

/// Memoizes the zone map and per-ship maneuver tables
///
/// Each key is fetched at most once on success. Failed loads leave the cache
/// untouched, so the next call tries again.
pub struct DataCache<S> {
    source: S,
    zones: Option<ZoneMap>,
    maneuvers: HashMap<String, ManeuverTable>,
    fetches: Cell<usize>,
}

impl<S: DataSource> DataCache<S> {
    pub fn new(source: S) -> Self {
        DataCache {
            source,
            zones: None,
            maneuvers: HashMap::new(),
            fetches: Cell::new(0),
        }
    }

    /// Number of fetches issued to the source so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn get_zones(&mut self) -> Result<&ZoneMap, LoadError> {
        if self.zones.is_none() {
            let content = self.fetch(ZONES_PATH)?;
            let zones = ZoneMap::from_json(&content).map_err(|source| LoadError::Parse {
                path: ZONES_PATH.to_string(),
                source,
            })?;
            log::info!("Loaded {} zones from {}", zones.len(), ZONES_PATH);
            self.zones = Some(zones);
        }
        // populated above
        Ok(self.zones.get_or_insert_with(ZoneMap::default))
    }

    pub fn get_maneuvers(&mut self, ship: &str) -> Result<&ManeuverTable, LoadError> {
        if !self.maneuvers.contains_key(ship) {
            let path = maneuver_path(ship);
            let content = self.fetch(&path)?;
            let table = ManeuverTable::from_json(&content)
                .map_err(|source| LoadError::Parse { path: path.clone(), source })?;
            log::info!("Loaded maneuver table for {} ({} arcs)", ship, table.arcs.len());
            self.maneuvers.insert(ship.to_string(), table);
        }
        Ok(self.maneuvers.entry(ship.to_string()).or_default())
    }

    pub fn is_cached(&self, ship: &str) -> bool {
        self.maneuvers.contains_key(ship)
    }

    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.fetches.set(self.fetches.get() + 1);
        log::debug!("Fetching {}", path);
        self.source.fetch(path)
    }
}
