use std::path::{Component, Path, PathBuf};

use sugar_path::SugarPath;

/// Directory name whose subtree holds installed third-party packages.
pub const VENDOR_DIR: &str = "node_modules";

pub trait PathExt {
  /// Joins a relative path onto `cwd` and normalizes the result. Absolute paths are only
  /// normalized.
  fn absolutize_from(&self, cwd: &Path) -> PathBuf;

  /// The directory containing this file, or the path itself when it has no parent.
  fn containing_dir(&self) -> &Path;

  /// Whether the path, taken relative to `root`, passes through a vendored directory.
  fn is_vendored_under(&self, root: &Path) -> bool;
}

impl PathExt for Path {
  fn absolutize_from(&self, cwd: &Path) -> PathBuf {
    cwd.join(self).normalize()
  }

  fn containing_dir(&self) -> &Path {
    self.parent().filter(|parent| parent.components().next().is_some()).unwrap_or(self)
  }

  fn is_vendored_under(&self, root: &Path) -> bool {
    self
      .relative(root)
      .components()
      .any(|component| matches!(component, Component::Normal(name) if name == VENDOR_DIR))
  }
}

#[test]
fn test_absolutize_from() {
  let cwd = Path::new("/project");
  assert_eq!(Path::new("./src/../lib/a.glsl").absolutize_from(cwd), Path::new("/project/lib/a.glsl"));
  assert_eq!(Path::new("/other/b.glsl").absolutize_from(cwd), Path::new("/other/b.glsl"));
}

#[test]
fn test_containing_dir() {
  assert_eq!(Path::new("/project/src/a.glsl").containing_dir(), Path::new("/project/src"));
  assert_eq!(Path::new("a.glsl").containing_dir(), Path::new("a.glsl"));
}

#[test]
fn test_is_vendored_under() {
  let root = Path::new("/project/src");
  assert!(Path::new("/project/src/node_modules/glsl-noise").is_vendored_under(root));
  assert!(Path::new("/project/node_modules/glsl-noise/lib").is_vendored_under(root));
  assert!(!Path::new("/project/src/shaders").is_vendored_under(root));
  assert!(!Path::new("/project/src/node_modules_backup").is_vendored_under(root));
}
