use std::{path::PathBuf, sync::Arc};

use glsldeps_fs::FileSystem;
use glsldeps_resolver::ModuleResolver;
use rustc_hash::FxHashMap;

use crate::{ExecutionMode, TransformRequire};

#[derive(Debug)]
pub struct NormalizedDepperOptions {
  pub cwd: PathBuf,
  pub mode: ExecutionMode,
  pub fs: Arc<dyn FileSystem>,
  pub resolver: Arc<dyn ModuleResolver>,
  pub transform_require: TransformRequire,
  /// Keys are absolute.
  pub files: FxHashMap<PathBuf, String>,
  pub parallel: usize,
}
