use std::sync::Arc;

use glsldeps_common::{DepperOptions, ExecutionMode, NormalizedDepperOptions, DEFAULT_PARALLEL};
use glsldeps_error::{ConfigurationError, DepsResult};
use glsldeps_fs::OsFileSystem;
use glsldeps_resolver::Resolver;
use glsldeps_utils::path_ext::PathExt;
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: DepperOptions) -> DepsResult<NormalizedDepperOptions> {
  let cwd = match raw_options.cwd {
    Some(cwd) => cwd,
    None => std::env::current_dir().map_err(|_| ConfigurationError::MissingCollaborator("cwd"))?,
  };
  let cwd = cwd.absolutize();

  let mode = raw_options.mode.unwrap_or_default();
  let transform_require = raw_options.transform_require.unwrap_or_default();
  if mode == ExecutionMode::Sync && transform_require.is_async() {
    return Err(ConfigurationError::AsyncInSyncContext.into());
  }

  let files = raw_options
    .files
    .unwrap_or_default()
    .into_iter()
    .map(|(path, source)| (path.absolutize_from(&cwd), source))
    .collect();

  Ok(NormalizedDepperOptions {
    fs: raw_options.fs.unwrap_or_else(|| Arc::new(OsFileSystem)),
    resolver: raw_options.resolver.unwrap_or_else(|| Arc::new(Resolver::new(cwd.clone()))),
    transform_require,
    files,
    parallel: raw_options.parallel.unwrap_or(DEFAULT_PARALLEL).max(1),
    mode,
    cwd,
  })
}
