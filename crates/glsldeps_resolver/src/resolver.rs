use std::path::{Path, PathBuf};

use dashmap::DashMap;
use itertools::Itertools;
use rustc_hash::FxBuildHasher;

use oxc_resolver::{ResolveOptions as OxcResolverOptions, Resolver as OxcResolver};

use crate::ModuleResolver;

pub const DEFAULT_EXTENSIONS: &[&str] = &[".glsl"];

/// Shader packages may point at their entry through a dedicated field, checked before `main`.
pub const DEFAULT_MAIN_FIELDS: &[&str] = &["glslify", "main"];

/// Node-style module resolution for shader files.
#[derive(Debug)]
pub struct Resolver {
  cwd: PathBuf,
  inner: OxcResolver,
  resolved_cache: DashMap<(PathBuf, String), PathBuf, FxBuildHasher>,
}

impl Resolver {
  pub fn new(cwd: PathBuf) -> Self {
    Self::with_extensions(cwd, DEFAULT_EXTENSIONS.iter().copied())
  }

  pub fn with_extensions<'a>(cwd: PathBuf, extensions: impl IntoIterator<Item = &'a str>) -> Self {
    let extensions = extensions.into_iter().map(ToString::to_string).unique().collect();
    let main_fields = DEFAULT_MAIN_FIELDS.iter().map(ToString::to_string).collect();

    let inner = OxcResolver::new(OxcResolverOptions {
      extensions,
      main_fields,
      ..Default::default()
    });

    Self { cwd, inner, resolved_cache: DashMap::default() }
  }
}

impl ModuleResolver for Resolver {
  fn resolve(&self, specifier: &str, basedir: &Path) -> anyhow::Result<PathBuf> {
    let dir = if basedir.components().next().is_some() { basedir } else { self.cwd.as_path() };
    let key = (dir.to_path_buf(), specifier.to_string());

    if let Some(hit) = self.resolved_cache.get(&key) {
      return Ok(hit.value().clone());
    }

    let resolution = self.inner.resolve(dir, specifier)?;
    let path = resolution.full_path();
    tracing::trace!(specifier, from = %dir.display(), to = %path.display(), "resolved");

    self.resolved_cache.insert(key, path.clone());
    Ok(path)
  }
}
