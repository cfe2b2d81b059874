//! JSON file store for the record list.
//!
//! # Responsibility
//! - Read and replace the single per-user dictionary file.
//!
//! # Invariants
//! - Writes go to a sibling temp file that is then renamed over the target,
//!   so a failed write never leaves a truncated dictionary behind.
//! - Parent directories are created on first save.
//!
//! # See also
//! - `crate::config` for how the default path is resolved.

use super::codec::{decode_records, encode_records};
use super::{EmojiStore, LoadError, LoadResult, PersistError, PersistResult};
use crate::model::emoji::EmojiRecord;
use log::{debug, error, info};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File-backed store writing one JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> PersistError {
        PersistError::Write {
            location: self.location(),
            source,
        }
    }

    fn temp_path(&self) -> io::Result<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| {
            io::Error::new(
                ErrorKind::InvalidInput,
                format!("`{}` does not name a file", self.path.display()),
            )
        })?;
        let temp_name = format!(
            ".{}.{}.tmp",
            file_name.to_string_lossy(),
            std::process::id()
        );
        Ok(self.path.with_file_name(temp_name))
    }

    fn replace_contents(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path()?;
        fs::write(&temp_path, content.as_bytes())?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }
        Ok(())
    }
}

impl EmojiStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn try_load(&self) -> LoadResult<Vec<EmojiRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(LoadError::NotFound {
                    location: self.location(),
                });
            }
            Err(source) => {
                return Err(LoadError::Read {
                    location: self.location(),
                    source,
                });
            }
        };

        decode_records(&text).map_err(|source| LoadError::Parse {
            location: self.location(),
            source,
        })
    }

    fn save(&self, records: &[EmojiRecord]) -> PersistResult<()> {
        let started_at = Instant::now();
        debug!(
            "event=emoji_save module=store status=start mode=file count={}",
            records.len()
        );

        let content = encode_records(records)?;
        match self.replace_contents(&content) {
            Ok(()) => {
                info!(
                    "event=emoji_save module=store status=ok mode=file count={} bytes={} duration_ms={}",
                    records.len(),
                    content.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=emoji_save module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(self.write_error(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JsonFileStore;
    use std::path::PathBuf;

    #[test]
    fn temp_path_is_hidden_sibling_of_target() {
        let store = JsonFileStore::new("/data/emojidex/emojis.json");
        let temp = store.temp_path().unwrap();

        assert_eq!(temp.parent(), Some(PathBuf::from("/data/emojidex").as_path()));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".emojis.json."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn temp_path_rejects_path_without_file_name() {
        let store = JsonFileStore::new("/");
        assert!(store.temp_path().is_err());
    }
}
