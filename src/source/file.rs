/// JSON file cache of yearly datasets
///
/// Each year lives in its own file inside the cache directory, so a
/// lookup window that crosses New Year reads (or fetches) two files.

use std::path::{Path, PathBuf};

use crate::source::{SourceError, YearDataset};

/// Directory name used under the home directory
const HOME_DIR_NAME: &str = ".prayer-times-cli";

/// Directory name used under platform data/config directories
const APP_DIR_NAME: &str = "prayer-times-cli";

/// Cache of yearly datasets stored as pretty-printed JSON files
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the cache file for `year`
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("prayer-times-{}.json", year))
    }

    /// Load the cached dataset for `year`
    ///
    /// Returns `Ok(None)` when nothing has been cached for that year yet.
    pub fn load(&self, year: i32) -> Result<Option<YearDataset>, SourceError> {
        let path = self.path_for(year);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No cache file for {} at {}", year, path.display());
                return Ok(None);
            }
            Err(source) => return Err(SourceError::Io { path, source }),
        };

        let dataset: YearDataset = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded {} days for {} from {}", dataset.len(), year, path.display());
        Ok(Some(dataset))
    }

    /// Write the dataset for `year`, creating the cache directory if needed
    pub fn save(&self, year: i32, dataset: &YearDataset) -> Result<(), SourceError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| SourceError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(year);
        let contents = serde_json::to_string_pretty(dataset)?;
        std::fs::write(&path, contents).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Cached {} days for {} at {}", dataset.len(), year, path.display());
        Ok(())
    }
}

/// Pick a writable cache directory
///
/// Candidates are tried in order: home directory, platform data directory,
/// platform config directory, the working directory. The system temp
/// directory is the last resort.
pub fn default_cache_dir() -> Result<PathBuf, SourceError> {
    let potential_paths = [
        dirs::home_dir().map(|p| p.join(HOME_DIR_NAME)),
        dirs::data_dir().map(|p| p.join(APP_DIR_NAME)),
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME)),
        std::env::current_dir().ok().map(|p| p.join(HOME_DIR_NAME)),
    ];

    for candidate in potential_paths.iter().flatten() {
        if is_writable_dir(candidate) {
            return Ok(candidate.clone());
        }
    }

    let temp_path = std::env::temp_dir().join(APP_DIR_NAME);
    std::fs::create_dir_all(&temp_path).map_err(|source| SourceError::Io {
        path: temp_path.clone(),
        source,
    })?;

    tracing::warn!("Using temporary directory for cache: {}", temp_path.display());
    Ok(temp_path)
}

fn is_writable_dir(path: &Path) -> bool {
    if std::fs::create_dir_all(path).is_err() {
        return false;
    }
    let marker = path.join(".test_write");
    if std::fs::write(&marker, "test").is_ok() {
        let _ = std::fs::remove_file(&marker);
        return true;
    }
    false
}
