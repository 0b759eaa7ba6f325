use std::path::Path;

use glsldeps_common::TransformEntry;
use glsldeps_error::{DepsError, DepsResult};

fn transform_error(file: &Path, entry: &TransformEntry, source: anyhow::Error) -> DepsError {
  DepsError::Transform { file: file.to_path_buf(), name: entry.name.clone(), source }
}

/// Runs `transforms` over `source` in order, feeding each output into the next transform.
/// Every transform must have a synchronous interface.
pub fn apply_transforms(
  file: &Path,
  source: String,
  transforms: &[TransformEntry],
) -> DepsResult<String> {
  transforms.iter().try_fold(source, |source, entry| {
    let Some(transform) = entry.transform.sync_fn() else {
      return Err(DepsError::MissingSyncInterface { name: entry.name.clone() });
    };
    tracing::trace!(transform = %entry.name, file = %file.display(), "applying transform");
    transform(file, &source, &entry.options).map_err(|err| transform_error(file, entry, err))
  })
}

/// Like [`apply_transforms`], awaiting the asynchronous interface of a transform when it has
/// one and calling the synchronous one in place otherwise.
pub async fn apply_transforms_async(
  file: &Path,
  mut source: String,
  transforms: &[TransformEntry],
) -> DepsResult<String> {
  for entry in transforms {
    tracing::trace!(transform = %entry.name, file = %file.display(), "applying transform");
    let output = if let Some(transform) = entry.transform.async_fn() {
      transform(file.to_path_buf(), source, entry.options.clone()).await
    } else if let Some(transform) = entry.transform.sync_fn() {
      transform(file, &source, &entry.options)
    } else {
      return Err(DepsError::MissingSyncInterface { name: entry.name.clone() });
    };
    source = output.map_err(|err| transform_error(file, entry, err))?;
  }
  Ok(source)
}
