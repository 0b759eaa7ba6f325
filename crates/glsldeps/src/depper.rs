use std::{
  cell::{Cell, RefCell},
  path::{Path, PathBuf},
  sync::Arc,
};

use glsldeps_common::{
  DepperOptions, ExecutionMode, ModuleId, ModuleIdx, ModuleNode, TransformDefinition,
  TransformEntry, TransformFlags, TransformOptions, TransformRef, INLINE_NAME_PREFIX,
};
use glsldeps_error::{ConfigurationError, DepsResult};
use glsldeps_utils::path_ext::PathExt;
use rustc_hash::FxHashMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
  graph::ModuleGraph,
  transform::{apply_transforms, apply_transforms_async},
  types::{SharedOptions, SharedTransforms},
  utils::{load_source::SourceCache, normalize_options::normalize_options},
};

/// Builds the dependency graph of a shader entry.
///
/// A graph runs in the [`ExecutionMode`] it was created with: `add`, `inline`,
/// `transforms_for_file` and `apply_transforms` for sync graphs, their `_async` counterparts
/// for async ones. Calling the other family fails with a configuration error.
///
/// Every resolved file is built at most once per graph; later imports of it, and later `add`
/// calls reaching it, reuse its node.
pub struct Depper {
  pub(crate) options: SharedOptions,
  /// Registered through [`Depper::transform`], skipped for vendored files.
  pub(crate) transforms: Vec<TransformDefinition>,
  pub(crate) global_transforms: Vec<TransformDefinition>,
  pub(crate) graph: RefCell<ModuleGraph>,
  pub(crate) sources: RefCell<SourceCache>,
  /// Directory to the transforms of the files in it.
  pub(crate) transform_cache: RefCell<FxHashMap<PathBuf, SharedTransforms>>,
  pub(crate) subscribers: RefCell<Vec<UnboundedSender<PathBuf>>>,
  inline_counter: Cell<usize>,
}

impl Depper {
  pub fn new(options: DepperOptions) -> DepsResult<Self> {
    let options = normalize_options(options)?;
    let sources = SourceCache::new(options.files.clone());

    Ok(Self {
      options: Arc::new(options),
      transforms: Vec::new(),
      global_transforms: Vec::new(),
      graph: RefCell::default(),
      sources: RefCell::new(sources),
      transform_cache: RefCell::default(),
      subscribers: RefCell::default(),
      inline_counter: Cell::new(0),
    })
  }

  pub fn mode(&self) -> ExecutionMode {
    self.options.mode
  }

  pub fn cwd(&self) -> &Path {
    &self.options.cwd
  }

  /// Registers a transform for every file the graph builds.
  ///
  /// `global: true` in `options` also applies it to vendored files, after config-declared
  /// transforms. `post: true` marks it for a later bundling stage; the graph never applies it.
  pub fn transform(
    &mut self,
    transform: impl Into<TransformRef>,
    mut options: TransformOptions,
  ) -> &mut Self {
    let flags = TransformFlags::take_from(&mut options);
    let definition = TransformDefinition::new(transform.into(), options);

    if flags.post {
      tracing::debug!(transform = %definition.name, "skipping post transform");
    } else if flags.global {
      self.global_transforms.push(definition);
    } else {
      self.transforms.push(definition);
    }
    self
  }

  /// Receives the path of every file the graph reads, in read order.
  pub fn subscribe(&self) -> UnboundedReceiver<PathBuf> {
    let (tx, rx) = mpsc::unbounded_channel();
    self.subscribers.borrow_mut().push(tx);
    rx
  }

  /// The nodes built so far, entry first.
  pub fn nodes(&self) -> Vec<ModuleNode> {
    self.graph.borrow().to_vec()
  }

  /// Builds the graph of `file` and returns every node of this graph.
  pub fn add(&self, file: impl AsRef<Path>) -> DepsResult<Vec<ModuleNode>> {
    self.ensure_mode(ExecutionMode::Sync, "add")?;
    let (idx, file) = self.alloc_entry(file.as_ref());
    self.load_module(idx, &file)?;
    Ok(self.nodes())
  }

  /// Async counterpart of [`Depper::add`]. Sibling subtrees are built concurrently, so with a
  /// file system whose reads finish in varying order, ids past the entry may differ between runs.
  pub async fn add_async(&self, file: impl AsRef<Path>) -> DepsResult<Vec<ModuleNode>> {
    self.ensure_mode(ExecutionMode::Async, "add_async")?;
    let (idx, file) = self.alloc_entry(file.as_ref());
    self.load_module_async(idx, file).await?;
    Ok(self.nodes())
  }

  /// Builds the graph of a source that has no file of its own. Imports resolve relative to
  /// `basedir`, the working directory by default.
  pub fn inline(
    &self,
    source: impl Into<String>,
    basedir: Option<&Path>,
  ) -> DepsResult<Vec<ModuleNode>> {
    self.ensure_mode(ExecutionMode::Sync, "inline")?;
    let file = self.register_inline(source.into(), basedir);
    self.add(file)
  }

  pub async fn inline_async(
    &self,
    source: impl Into<String>,
    basedir: Option<&Path>,
  ) -> DepsResult<Vec<ModuleNode>> {
    self.ensure_mode(ExecutionMode::Async, "inline_async")?;
    let file = self.register_inline(source.into(), basedir);
    self.add_async(file).await
  }

  /// Runs `transforms` over `source` as if it were the content of `file`.
  pub fn apply_transforms(
    &self,
    file: &Path,
    source: String,
    transforms: &[TransformEntry],
  ) -> DepsResult<String> {
    self.ensure_mode(ExecutionMode::Sync, "apply_transforms")?;
    apply_transforms(file, source, transforms)
  }

  pub async fn apply_transforms_async(
    &self,
    file: &Path,
    source: String,
    transforms: &[TransformEntry],
  ) -> DepsResult<String> {
    self.ensure_mode(ExecutionMode::Async, "apply_transforms_async")?;
    apply_transforms_async(file, source, transforms).await
  }

  pub(crate) fn ensure_mode(&self, expected: ExecutionMode, called: &'static str) -> DepsResult<()> {
    if self.options.mode == expected {
      Ok(())
    } else {
      Err(ConfigurationError::ModeMismatch { mode: self.options.mode.as_str(), called }.into())
    }
  }

  /// Entries get the same symlink-free identity the resolver gives imports, so an import cycling
  /// back to the entry hits the resolve cache. Known sources keep the path they were given.
  fn alloc_entry(&self, file: &Path) -> (ModuleIdx, PathBuf) {
    let file = file.absolutize_from(&self.options.cwd);
    let file = if self.sources.borrow().contains(&file) {
      file
    } else {
      self.options.fs.canonicalize(&file).unwrap_or(file)
    };
    let idx = self.graph.borrow_mut().alloc_module(ModuleId::from_path(&file));
    (idx, file)
  }

  fn register_inline(&self, source: String, basedir: Option<&Path>) -> PathBuf {
    let cwd = &self.options.cwd;
    let basedir = basedir.map_or_else(|| cwd.clone(), |dir| dir.absolutize_from(cwd));
    let n = self.inline_counter.get();
    self.inline_counter.set(n + 1);

    let file = basedir.join(format!("{INLINE_NAME_PREFIX}{n}"));
    self.sources.borrow_mut().insert(file.clone(), source);
    file
  }
}

impl std::fmt::Debug for Depper {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Depper")
      .field("options", &self.options)
      .field("transforms", &self.transforms)
      .field("global_transforms", &self.global_transforms)
      .field("modules", &self.graph.borrow().modules.len())
      .finish_non_exhaustive()
  }
}
