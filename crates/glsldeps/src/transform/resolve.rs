use glsldeps_common::{Transform, TransformDefinition, TransformEntry, TransformRef, TransformRequire};
use glsldeps_error::{ConfigurationError, DepsError, DepsResult};

use crate::Depper;

fn load_error(name: &str, source: anyhow::Error) -> DepsError {
  DepsError::TransformLoad { name: name.to_string(), source }
}

fn into_entry(definition: &TransformDefinition, transform: Transform) -> TransformEntry {
  TransformEntry {
    name: definition.name.clone(),
    transform,
    options: definition.options.clone(),
  }
}

impl Depper {
  /// Turns a registered or config-declared transform into one ready to run on the sync path.
  pub(crate) fn resolve_transform(
    &self,
    definition: &TransformDefinition,
  ) -> DepsResult<TransformEntry> {
    let transform = match &definition.transform {
      TransformRef::Loaded(transform) => transform.clone(),
      TransformRef::Named(name) => match &self.options.transform_require {
        TransformRequire::Sync(loader) => {
          loader.load(name, &self.options.cwd).map_err(|err| load_error(name, err))?
        }
        // Rejected while normalizing options, a sync graph never holds an async loader.
        TransformRequire::Async(_) => return Err(ConfigurationError::AsyncInSyncContext.into()),
      },
    };

    if !transform.has_sync_interface() {
      return Err(DepsError::MissingSyncInterface { name: definition.name.clone() });
    }
    Ok(into_entry(definition, transform))
  }

  pub(crate) async fn resolve_transform_async(
    &self,
    definition: &TransformDefinition,
  ) -> DepsResult<TransformEntry> {
    let transform = match &definition.transform {
      TransformRef::Loaded(transform) => transform.clone(),
      TransformRef::Named(name) => match &self.options.transform_require {
        TransformRequire::Sync(loader) => {
          loader.load(name, &self.options.cwd).map_err(|err| load_error(name, err))?
        }
        TransformRequire::Async(loader) => {
          loader.load(name, &self.options.cwd).await.map_err(|err| load_error(name, err))?
        }
      },
    };
    Ok(into_entry(definition, transform))
  }
}
