pub mod execution_mode;
pub mod normalized_depper_options;

use std::{path::PathBuf, sync::Arc};

use glsldeps_fs::FileSystem;
use glsldeps_resolver::ModuleResolver;

use crate::{ExecutionMode, TransformRequire};

#[derive(Default, Clone)]
pub struct DepperOptions {
  /// Root directory of the shaders. Defaults to the process working directory.
  pub cwd: Option<PathBuf>,
  pub mode: Option<ExecutionMode>,

  // --- Collaborators
  pub fs: Option<Arc<dyn FileSystem>>,
  pub resolver: Option<Arc<dyn ModuleResolver>>,
  pub transform_require: Option<TransformRequire>,

  /// Path to source pairs served instead of reading the file system. Useful for overriding.
  pub files: Option<Vec<(PathBuf, String)>>,
  /// Maximum number of sibling imports processed at once in async mode.
  pub parallel: Option<usize>,
}

impl std::fmt::Debug for DepperOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DepperOptions")
      .field("cwd", &self.cwd)
      .field("mode", &self.mode)
      .field("fs", &self.fs)
      .field("resolver", &self.resolver)
      .field("transform_require", &self.transform_require)
      .field("files", &self.files.as_ref().map(Vec::len))
      .field("parallel", &self.parallel)
      .finish()
  }
}
