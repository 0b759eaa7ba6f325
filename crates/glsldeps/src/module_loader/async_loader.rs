use std::path::PathBuf;

use futures::{
  future::LocalBoxFuture,
  stream::{self, StreamExt, TryStreamExt},
  FutureExt,
};
use glsldeps_common::ModuleIdx;
use glsldeps_error::{DepsError, DepsResult};
use glsldeps_utils::path_ext::PathExt;

use crate::{graph::Linked, scan::ScanResult, transform::apply_transforms_async, Depper};

impl Depper {
  /// Builds the node `idx` for `file`, then its dependencies with at most `parallel` sibling
  /// imports in flight.
  ///
  /// Imports are resolved concurrently but linked in pragma order once all of them resolved,
  /// so node ids don't depend on which resolution finishes first.
  pub(crate) fn load_module_async(
    &self,
    idx: ModuleIdx,
    file: PathBuf,
  ) -> LocalBoxFuture<'_, DepsResult<()>> {
    async move {
      let source = self.read_source_async(&file).await?;
      self.emit_file(&file);

      let transforms = self.select_transforms_async(&file).await?;
      let source = apply_transforms_async(&file, source, &transforms).await?;
      let ScanResult { imports, .. } = self.finish_transform(idx, source);

      let parallel = self.options.parallel;
      let basedir = file.containing_dir();
      let resolved: Vec<PathBuf> = stream::iter(&imports)
        .map(|import| self.resolve_import_async(import, basedir))
        .buffered(parallel)
        .try_collect()
        .await?;

      let linked: Vec<Linked> = resolved.iter().map(|path| self.link_module(path)).collect();

      let pending = linked.iter().filter_map(|linked| match linked {
        Linked::New(dep, path) => Some(Ok::<_, DepsError>((*dep, path.clone()))),
        Linked::Visited(_) => None,
      });
      stream::iter(pending)
        .try_for_each_concurrent(parallel, |(dep, path)| self.load_module_async(dep, path))
        .await?;

      let deps = imports.into_iter().zip(linked).map(|(import, linked)| {
        let dep = match linked {
          Linked::Visited(dep) | Linked::New(dep, _) => dep,
        };
        (import.name, dep)
      });
      self.bind_deps(idx, deps);

      Ok::<(), DepsError>(())
    }
    .boxed_local()
  }
}
