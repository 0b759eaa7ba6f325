use std::{
  io,
  path::{Path, PathBuf},
};

use async_trait::async_trait;

/// Read-only view of the file system a graph is built against.
///
/// Reads must be idempotent for a given path during one build; the graph caches what it reads
/// and relies on getting the same text back.
#[async_trait]
pub trait FileSystem: Send + Sync + std::fmt::Debug {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn is_file(&self, path: &Path) -> bool;

  /// The path with symlinks resolved, matching the identities a resolver hands out. File systems
  /// without links return the path unchanged.
  fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
    Ok(path.to_path_buf())
  }

  /// Non-blocking variant used by graphs in async mode. Falls back to the blocking read.
  async fn read_to_string_async(&self, path: &Path) -> io::Result<String> {
    self.read_to_string(path)
  }
}
