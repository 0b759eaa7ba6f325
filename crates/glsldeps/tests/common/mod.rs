#![allow(dead_code)]

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use glsldeps::{
  Depper, DepperOptions, ExecutionMode, ModuleNode, ModuleResolver, Transform, TransformRegistry,
  TransformRequire,
};
use glsldeps_fs::{FileSystem, MemoryFileSystem};
use sugar_path::SugarPath;

pub const CWD: &str = "/project";

/// Joins relative specifiers onto the importing directory and maps bare ones to
/// `<cwd>/node_modules/<name>/index.glsl`. Fails for files the file system doesn't have.
#[derive(Debug)]
pub struct JoinResolver {
  fs: Arc<MemoryFileSystem>,
}

impl ModuleResolver for JoinResolver {
  fn resolve(&self, specifier: &str, basedir: &Path) -> anyhow::Result<PathBuf> {
    let path = if specifier.starts_with('.') || specifier.starts_with('/') {
      basedir.join(specifier).normalize()
    } else {
      Path::new(CWD).join("node_modules").join(specifier).join("index.glsl")
    };
    anyhow::ensure!(self.fs.is_file(&path), "no such module: {}", path.display());
    Ok(path)
  }
}

pub fn memory_fs(files: &[(&str, &str)]) -> Arc<MemoryFileSystem> {
  Arc::new(MemoryFileSystem::new(files.iter().copied()))
}

pub fn options(fs: &Arc<MemoryFileSystem>, mode: ExecutionMode) -> DepperOptions {
  DepperOptions {
    cwd: Some(PathBuf::from(CWD)),
    mode: Some(mode),
    fs: Some(Arc::clone(fs) as Arc<dyn FileSystem>),
    resolver: Some(Arc::new(JoinResolver { fs: Arc::clone(fs) })),
    transform_require: Some(TransformRequire::Sync(Arc::new(registry()))),
    ..Default::default()
  }
}

pub fn depper(fs: &Arc<MemoryFileSystem>) -> Depper {
  Depper::new(options(fs, ExecutionMode::Sync)).unwrap()
}

pub fn async_depper(fs: &Arc<MemoryFileSystem>) -> Depper {
  Depper::new(options(fs, ExecutionMode::Async)).unwrap()
}

/// A transform appending `// <name>` on a line of its own.
pub fn marker(name: &'static str) -> Transform {
  Transform::new_sync(name, move |_, src, _| Ok(format!("{src}\n// {name}")))
}

/// Named transforms config files and tests refer to.
pub fn registry() -> TransformRegistry {
  TransformRegistry::default()
    .with(marker("local-t"))
    .with(marker("config-t"))
    .with(marker("global-t"))
    .with(marker("post-t"))
}

pub fn node<'a>(nodes: &'a [ModuleNode], file: &str) -> &'a ModuleNode {
  nodes.iter().find(|node| &*node.file == file).unwrap_or_else(|| panic!("no node for {file}"))
}

pub fn dep(node: &ModuleNode, name: &str) -> usize {
  node.deps[name].index()
}
