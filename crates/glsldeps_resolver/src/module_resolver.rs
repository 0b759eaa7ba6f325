use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Turns an import specifier into the canonical identity of a module.
///
/// Must be a pure function of its inputs for a given file system state, the graph deduplicates
/// modules by the returned path.
#[async_trait]
pub trait ModuleResolver: Send + Sync + std::fmt::Debug {
  fn resolve(&self, specifier: &str, basedir: &Path) -> anyhow::Result<PathBuf>;

  async fn resolve_async(&self, specifier: &str, basedir: &Path) -> anyhow::Result<PathBuf> {
    self.resolve(specifier, basedir)
  }
}
