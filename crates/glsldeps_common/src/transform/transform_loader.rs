use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use crate::Transform;

/// Loads a transform by name, blocking.
pub trait TransformLoader: Send + Sync {
  /// `cwd` is the graph's working directory, the base names are resolved against.
  fn load(&self, name: &str, cwd: &Path) -> anyhow::Result<Transform>;
}

/// Loads a transform by name without blocking. Only usable by graphs in async mode.
#[async_trait]
pub trait AsyncTransformLoader: Send + Sync {
  async fn load(&self, name: &str, cwd: &Path) -> anyhow::Result<Transform>;
}

/// The transform loading strategy of a graph, fixed at construction.
#[derive(Clone)]
pub enum TransformRequire {
  Sync(Arc<dyn TransformLoader>),
  Async(Arc<dyn AsyncTransformLoader>),
}

impl TransformRequire {
  pub fn is_async(&self) -> bool {
    matches!(self, Self::Async(_))
  }
}

impl Default for TransformRequire {
  fn default() -> Self {
    Self::Sync(Arc::new(TransformRegistry::default()))
  }
}

impl std::fmt::Debug for TransformRequire {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Sync(_) => f.write_str("TransformRequire::Sync"),
      Self::Async(_) => f.write_str("TransformRequire::Async"),
    }
  }
}

/// Name-keyed transform loader, the in-process stand-in for installing transform packages.
#[derive(Debug, Default, Clone)]
pub struct TransformRegistry {
  transforms: FxHashMap<String, Transform>,
}

impl TransformRegistry {
  /// Registers `transform` under its own name.
  #[must_use]
  pub fn with(mut self, transform: Transform) -> Self {
    self.register(transform);
    self
  }

  pub fn register(&mut self, transform: Transform) {
    self.transforms.insert(transform.name().to_string(), transform);
  }

  pub fn get(&self, name: &str) -> Option<&Transform> {
    self.transforms.get(name)
  }
}

impl TransformLoader for TransformRegistry {
  fn load(&self, name: &str, cwd: &Path) -> anyhow::Result<Transform> {
    self
      .get(name)
      .cloned()
      .ok_or_else(|| anyhow::anyhow!("Cannot find transform '{name}' from '{}'", cwd.display()))
  }
}

#[async_trait]
impl AsyncTransformLoader for TransformRegistry {
  async fn load(&self, name: &str, cwd: &Path) -> anyhow::Result<Transform> {
    TransformLoader::load(self, name, cwd)
  }
}
