use std::{
  cell::RefCell,
  path::{Path, PathBuf},
};

use glsldeps_error::{DepsError, DepsResult};
use glsldeps_fs::FileSystem;
use rustc_hash::FxHashMap;

/// Sources already known to a graph: pre-seeded files, inline entries and everything read so
/// far. A path present here is never read from the file system again.
#[derive(Debug, Default)]
pub struct SourceCache {
  sources: FxHashMap<PathBuf, String>,
}

impl SourceCache {
  pub fn new(sources: FxHashMap<PathBuf, String>) -> Self {
    Self { sources }
  }

  pub fn get(&self, path: &Path) -> Option<&str> {
    self.sources.get(path).map(String::as_str)
  }

  pub fn contains(&self, path: &Path) -> bool {
    self.sources.contains_key(path)
  }

  pub fn insert(&mut self, path: PathBuf, source: String) {
    self.sources.insert(path, source);
  }
}

fn cached(cache: &RefCell<SourceCache>, path: &Path) -> Option<String> {
  cache.borrow().get(path).map(ToString::to_string)
}

pub fn load_source(
  fs: &dyn FileSystem,
  cache: &RefCell<SourceCache>,
  path: &Path,
) -> DepsResult<String> {
  if let Some(source) = cached(cache, path) {
    return Ok(source);
  }

  let source = fs
    .read_to_string(path)
    .map_err(|source| DepsError::Read { path: path.to_path_buf(), source })?;
  cache.borrow_mut().insert(path.to_path_buf(), source.clone());
  Ok(source)
}

pub async fn load_source_async(
  fs: &dyn FileSystem,
  cache: &RefCell<SourceCache>,
  path: &Path,
) -> DepsResult<String> {
  if let Some(source) = cached(cache, path) {
    return Ok(source);
  }

  let source = fs
    .read_to_string_async(path)
    .await
    .map_err(|source| DepsError::Read { path: path.to_path_buf(), source })?;
  cache.borrow_mut().insert(path.to_path_buf(), source.clone());
  Ok(source)
}
