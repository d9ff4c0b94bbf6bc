// File-backed flag store: one `key=value` pair per line.

use handfield_core::{CoreError, CoreResult, FlagStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    /// Use `path` as the backing file. It does not need to exist yet, but
    /// its directory does.
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !dir.is_dir() {
            return Err(CoreError::StoreUnavailable(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_pairs(&self) -> Vec<(String, String)> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_pairs(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("could not read {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }
}

pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_owned(), v.trim().to_owned()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

impl FlagStore for FileFlagStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.read_pairs()
            .into_iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn set_item(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let mut pairs = self.read_pairs();
        pairs.retain(|(k, _)| k != key);
        pairs.push((key.to_owned(), value.to_owned()));
        let body: String = pairs.iter().map(|(k, v)| format!("{k}={v}\n")).collect();
        fs::write(&self.path, body).map_err(|e| CoreError::StoreWrite {
            key: key.to_owned(),
            reason: e.to_string(),
        })
    }
}
