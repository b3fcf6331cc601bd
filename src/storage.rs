use crate::board::BoardData;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML file persistence for the board
///
/// A missing file loads as an empty board; saves rewrite the whole file.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<BoardData> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no data file, starting empty");
            return Ok(BoardData::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let data: BoardData = toml::from_str(&content)?;
        debug!(path = %self.file_path.display(), "loaded board data");
        Ok(data)
    }

    pub fn save(&self, data: &BoardData) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content)?;
        debug!(path = %self.file_path.display(), "saved board data");
        Ok(())
    }
}
