use std::{
  io,
  path::{Path, PathBuf},
};

use async_trait::async_trait;

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

#[async_trait]
impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn is_file(&self, path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
  }

  fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
    std::fs::canonicalize(path)
  }

  async fn read_to_string_async(&self, path: &Path) -> io::Result<String> {
    tokio::fs::read_to_string(path).await
  }
}
