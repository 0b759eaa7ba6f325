use std::path::Path;

use glsldeps_common::ModuleIdx;
use glsldeps_error::DepsResult;
use glsldeps_utils::path_ext::PathExt;

use crate::{graph::Linked, scan::ScanResult, transform::apply_transforms, Depper};

impl Depper {
  /// Builds the node `idx` for `file`, then its dependencies depth-first.
  pub(crate) fn load_module(&self, idx: ModuleIdx, file: &Path) -> DepsResult<()> {
    let source = self.read_source(file)?;
    self.emit_file(file);

    let transforms = self.select_transforms(file)?;
    let source = apply_transforms(file, source, &transforms)?;
    let ScanResult { imports, .. } = self.finish_transform(idx, source);

    let basedir = file.containing_dir();
    for import in imports {
      let resolved = self.resolve_import(&import, basedir)?;
      let dep = match self.link_module(&resolved) {
        Linked::Visited(dep) => dep,
        Linked::New(dep, path) => {
          self.load_module(dep, &path)?;
          dep
        }
      };
      self.bind_deps(idx, [(import.name, dep)]);
    }

    Ok(())
  }
}
