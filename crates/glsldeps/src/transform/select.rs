use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use glsldeps_common::{ExecutionMode, PackageJson, TransformDefinition, TransformEntry, CONFIG_FILE_NAME};
use glsldeps_error::{DepsResult, PreconditionError};
use glsldeps_utils::path_ext::PathExt;
use sugar_path::SugarPath;

use crate::{
  types::SharedTransforms,
  utils::load_source::{load_source, load_source_async},
  Depper,
};

/// Everything known about a directory's transforms before any of them is loaded.
struct PendingSelection {
  dir: PathBuf,
  vendored: bool,
  config_path: Option<PathBuf>,
}

enum Selection {
  Cached(SharedTransforms),
  Pending(PendingSelection),
}

impl Depper {
  /// The ordered transforms applied to `file`: the locally registered ones, those declared by
  /// the nearest `package.json`, then the global ones. Files under `node_modules`, relative to
  /// the entry, skip the local ones. Lists are computed once per directory.
  pub fn transforms_for_file(&self, file: &Path) -> DepsResult<SharedTransforms> {
    self.ensure_mode(ExecutionMode::Sync, "transforms_for_file")?;
    self.select_transforms(file)
  }

  pub async fn transforms_for_file_async(&self, file: &Path) -> DepsResult<SharedTransforms> {
    self.ensure_mode(ExecutionMode::Async, "transforms_for_file_async")?;
    self.select_transforms_async(file).await
  }

  pub(crate) fn select_transforms(&self, file: &Path) -> DepsResult<SharedTransforms> {
    let pending = match self.begin_selection(file)? {
      Selection::Cached(transforms) => return Ok(transforms),
      Selection::Pending(pending) => pending,
    };

    let config = match &pending.config_path {
      Some(path) => {
        let content = load_source(&*self.options.fs, &self.sources, path)?;
        Some(PackageJson::parse(path, &content)?)
      }
      None => None,
    };

    let entries = self
      .definitions_for(&pending, config.as_ref())
      .iter()
      .map(|definition| self.resolve_transform(definition))
      .collect::<DepsResult<Vec<_>>>()?;
    Ok(self.finish_selection(pending.dir, entries))
  }

  pub(crate) async fn select_transforms_async(&self, file: &Path) -> DepsResult<SharedTransforms> {
    let pending = match self.begin_selection(file)? {
      Selection::Cached(transforms) => return Ok(transforms),
      Selection::Pending(pending) => pending,
    };

    let config = match &pending.config_path {
      Some(path) => {
        let content = load_source_async(&*self.options.fs, &self.sources, path).await?;
        Some(PackageJson::parse(path, &content)?)
      }
      None => None,
    };

    let mut entries = Vec::new();
    for definition in self.definitions_for(&pending, config.as_ref()) {
      entries.push(self.resolve_transform_async(&definition).await?);
    }
    Ok(self.finish_selection(pending.dir, entries))
  }

  fn begin_selection(&self, file: &Path) -> DepsResult<Selection> {
    let entry_dir = self
      .graph
      .borrow()
      .entry()
      .map(|entry| entry.file.as_path().containing_dir().to_path_buf())
      .ok_or(PreconditionError::NoEntryYet)?;

    let file = file.absolutize_from(&self.options.cwd);
    let dir = file.containing_dir().to_path_buf();

    if let Some(transforms) = self.transform_cache.borrow().get(&dir) {
      tracing::trace!(dir = %dir.display(), "transform cache hit");
      return Ok(Selection::Cached(Arc::clone(transforms)));
    }

    Ok(Selection::Pending(PendingSelection {
      vendored: dir.is_vendored_under(&entry_dir),
      config_path: self.find_config(&dir),
      dir,
    }))
  }

  /// Nearest `package.json` at or above `dir`. Pre-seeded sources count as existing files.
  fn find_config(&self, dir: &Path) -> Option<PathBuf> {
    dir.ancestors().map(|ancestor| ancestor.join(CONFIG_FILE_NAME)).find(|candidate| {
      self.sources.borrow().contains(candidate) || self.options.fs.is_file(candidate)
    })
  }

  fn definitions_for(
    &self,
    pending: &PendingSelection,
    config: Option<&PackageJson>,
  ) -> Vec<TransformDefinition> {
    let local: &[TransformDefinition] = if pending.vendored { &[] } else { &self.transforms };
    let declared = config.map_or(&[][..], |config| config.transforms.as_slice());

    local.iter().chain(declared).chain(&self.global_transforms).cloned().collect()
  }

  fn finish_selection(&self, dir: PathBuf, entries: Vec<TransformEntry>) -> SharedTransforms {
    let mut cache = self.transform_cache.borrow_mut();
    let transforms = cache.entry(dir).or_insert_with_key(|dir| {
      tracing::debug!(
        dir = %dir.display(),
        transforms = ?entries.iter().map(|entry| entry.name.as_str()).collect::<Vec<_>>(),
        "resolved transforms"
      );
      Arc::from(entries)
    });
    Arc::clone(transforms)
  }
}
