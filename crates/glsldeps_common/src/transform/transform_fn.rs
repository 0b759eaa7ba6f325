use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use arcstr::ArcStr;
use futures::future::BoxFuture;

/// Options handed to a transform. Control flags are stripped before a transform sees them.
pub type TransformOptions = serde_json::Map<String, serde_json::Value>;

pub type SyncTransformFn =
  Arc<dyn Fn(&Path, &str, &TransformOptions) -> anyhow::Result<String> + Send + Sync>;

pub type AsyncTransformFn = Arc<
  dyn Fn(PathBuf, String, TransformOptions) -> BoxFuture<'static, anyhow::Result<String>>
    + Send
    + Sync,
>;

/// A loaded source transform.
///
/// A transform exposes a synchronous interface, an asynchronous one, or both. Graphs in sync
/// mode can only run transforms with a synchronous interface; graphs in async mode prefer the
/// asynchronous one and fall back to calling the synchronous one in place.
#[derive(Clone)]
pub struct Transform {
  name: ArcStr,
  sync: Option<SyncTransformFn>,
  r#async: Option<AsyncTransformFn>,
}

impl Transform {
  pub fn new_sync<F>(name: impl Into<ArcStr>, f: F) -> Self
  where
    F: Fn(&Path, &str, &TransformOptions) -> anyhow::Result<String> + Send + Sync + 'static,
  {
    Self { name: name.into(), sync: Some(Arc::new(f)), r#async: None }
  }

  pub fn new_async<F>(name: impl Into<ArcStr>, f: F) -> Self
  where
    F: Fn(PathBuf, String, TransformOptions) -> BoxFuture<'static, anyhow::Result<String>>
      + Send
      + Sync
      + 'static,
  {
    Self { name: name.into(), sync: None, r#async: Some(Arc::new(f)) }
  }

  /// Adds an asynchronous interface next to an existing synchronous one.
  #[must_use]
  pub fn with_async<F>(mut self, f: F) -> Self
  where
    F: Fn(PathBuf, String, TransformOptions) -> BoxFuture<'static, anyhow::Result<String>>
      + Send
      + Sync
      + 'static,
  {
    self.r#async = Some(Arc::new(f));
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn sync_fn(&self) -> Option<&SyncTransformFn> {
    self.sync.as_ref()
  }

  pub fn async_fn(&self) -> Option<&AsyncTransformFn> {
    self.r#async.as_ref()
  }

  pub fn has_sync_interface(&self) -> bool {
    self.sync.is_some()
  }
}

impl std::fmt::Debug for Transform {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transform")
      .field("name", &self.name)
      .field("sync", &self.sync.is_some())
      .field("async", &self.r#async.is_some())
      .finish()
  }
}

/// What gets registered: an already loaded transform, or the name of one still to be loaded.
#[derive(Debug, Clone)]
pub enum TransformRef {
  Loaded(Transform),
  Named(String),
}

impl TransformRef {
  pub fn name(&self) -> &str {
    match self {
      Self::Loaded(transform) => transform.name(),
      Self::Named(name) => name,
    }
  }
}

impl From<Transform> for TransformRef {
  fn from(value: Transform) -> Self {
    Self::Loaded(value)
  }
}

impl From<&str> for TransformRef {
  fn from(value: &str) -> Self {
    Self::Named(value.to_string())
  }
}

impl From<String> for TransformRef {
  fn from(value: String) -> Self {
    Self::Named(value)
  }
}

#[test]
fn test_interfaces_and_names() {
  let upper = Transform::new_sync("upper", |_, src, _| Ok(src.to_uppercase()));
  assert!(upper.has_sync_interface());
  assert!(upper.async_fn().is_none());
  assert_eq!(TransformRef::from(upper).name(), "upper");
  assert_eq!(TransformRef::from("glslify-hex").name(), "glslify-hex");
}
