use std::path::Path;

use arcstr::ArcStr;
use serde::{Serialize, Serializer};

/// `ModuleId` is the canonical identity of a module: the resolved absolute path, or the
/// synthetic path given to an inline source.
/// - The resolve cache deduplicates modules by it.
/// - Cloning is cheap, the same id is held by the cache and by the module node.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  pub fn from_path(path: &Path) -> Self {
    Self(path.to_string_lossy().as_ref().into())
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl AsRef<Path> for ModuleId {
  fn as_ref(&self) -> &Path {
    Path::new(self.0.as_str())
  }
}

impl std::fmt::Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl Serialize for ModuleId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.0)
  }
}

#[test]
fn test_path_views_agree() {
  let id = ModuleId::from_path(Path::new("/project/shaders/noise.glsl"));
  assert_eq!(&*id, "/project/shaders/noise.glsl");
  assert_eq!(AsRef::<Path>::as_ref(&id), Path::new("/project/shaders/noise.glsl"));
  assert_eq!(id.to_string(), "/project/shaders/noise.glsl");
}
