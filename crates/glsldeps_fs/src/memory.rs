use std::{
  io,
  path::{Path, PathBuf},
};

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::FileSystem;

/// In-memory file system. Counts reads per path so callers can observe caching behavior.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
  files: DashMap<PathBuf, String, FxBuildHasher>,
  reads: DashMap<PathBuf, usize, FxBuildHasher>,
}

impl MemoryFileSystem {
  pub fn new<P: Into<PathBuf>, S: Into<String>>(files: impl IntoIterator<Item = (P, S)>) -> Self {
    let fs = Self::default();
    for (path, content) in files {
      fs.add_file(path, content);
    }
    fs
  }

  pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
    self.files.insert(path.into(), content.into());
  }

  pub fn read_count(&self, path: &Path) -> usize {
    self.reads.get(path).map_or(0, |count| *count)
  }
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    *self.reads.entry(path.to_path_buf()).or_default() += 1;
    self.files.get(path).map(|content| content.value().clone()).ok_or_else(|| {
      io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display()))
    })
  }

  fn is_file(&self, path: &Path) -> bool {
    self.files.contains_key(path)
  }
}

#[test]
fn test_memory_file_system() {
  let fs = MemoryFileSystem::new([("/a/index.glsl", "void main() {}")]);
  let path = Path::new("/a/index.glsl");

  assert!(fs.is_file(path));
  assert!(!fs.is_file(Path::new("/a")));
  assert_eq!(fs.read_to_string(path).unwrap(), "void main() {}");
  assert_eq!(fs.read_count(path), 1);
  assert_eq!(fs.read_to_string(Path::new("/a/b.glsl")).unwrap_err().kind(), io::ErrorKind::NotFound);
}
