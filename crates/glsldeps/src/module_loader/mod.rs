//! Per-file build steps shared by the sync and async drivers:
//! read, notify, select transforms, apply them, extract pragmas, resolve and link imports.

mod async_loader;
mod sync_loader;

use std::path::{Path, PathBuf};

use glsldeps_common::{ModuleId, ModuleIdx};
use glsldeps_error::{DepsError, DepsResult};

use crate::{
  graph::Linked,
  scan::{extract_pragmas, import_name, PragmaImport, ScanResult},
  utils::load_source::{load_source, load_source_async},
  Depper,
};

fn resolution_error(specifier: &str, from: &Path, err: &anyhow::Error) -> DepsError {
  DepsError::Resolution {
    specifier: specifier.to_string(),
    from: from.to_path_buf(),
    reason: err.to_string(),
  }
}

impl Depper {
  pub(crate) fn read_source(&self, file: &Path) -> DepsResult<String> {
    load_source(&*self.options.fs, &self.sources, file)
  }

  pub(crate) async fn read_source_async(&self, file: &Path) -> DepsResult<String> {
    load_source_async(&*self.options.fs, &self.sources, file).await
  }

  /// Tells every subscriber `file` was read. Subscribers that hung up are dropped.
  pub(crate) fn emit_file(&self, file: &Path) {
    self.subscribers.borrow_mut().retain(|subscriber| {
      let open = subscriber.send(file.to_path_buf()).is_ok();
      if !open {
        tracing::debug!("dropping closed file subscriber");
      }
      open
    });
  }

  /// Stores the transformed source on its node and scans it for pragmas.
  pub(crate) fn finish_transform(&self, idx: ModuleIdx, source: String) -> ScanResult {
    let scanned = extract_pragmas(&source);
    self.graph.borrow_mut().set_source(idx, source);
    scanned
  }

  pub(crate) fn resolve_import(&self, import: &PragmaImport, basedir: &Path) -> DepsResult<PathBuf> {
    let specifier = import_name(&import.specifier);
    self
      .options
      .resolver
      .resolve(specifier, basedir)
      .map_err(|err| resolution_error(specifier, basedir, &err))
  }

  pub(crate) async fn resolve_import_async(
    &self,
    import: &PragmaImport,
    basedir: &Path,
  ) -> DepsResult<PathBuf> {
    let specifier = import_name(&import.specifier);
    self
      .options
      .resolver
      .resolve_async(specifier, basedir)
      .await
      .map_err(|err| resolution_error(specifier, basedir, &err))
  }

  /// Looks a resolved dependency up in the resolve cache, allocating its node on first sight.
  pub(crate) fn link_module(&self, resolved: &Path) -> Linked {
    self.graph.borrow_mut().try_alloc_module(ModuleId::from_path(resolved))
  }

  pub(crate) fn bind_deps(&self, idx: ModuleIdx, deps: impl IntoIterator<Item = (String, ModuleIdx)>) {
    let mut graph = self.graph.borrow_mut();
    for (name, dep) in deps {
      graph.bind_dep(idx, name, dep);
    }
  }
}
