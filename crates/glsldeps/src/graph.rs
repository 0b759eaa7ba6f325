use std::path::PathBuf;

use glsldeps_common::{ModuleId, ModuleIdx, ModuleNode};
use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use sugar_path::SugarPath;

/// Outcome of looking a resolved module up in the graph.
#[derive(Debug, PartialEq, Eq)]
pub enum Linked {
  /// Built already, or being built.
  Visited(ModuleIdx),
  /// Freshly allocated; the caller is responsible for building it.
  New(ModuleIdx, PathBuf),
}

/// Nodes of one graph instance plus the resolve cache deduplicating them.
#[derive(Debug, Default)]
pub struct ModuleGraph {
  pub modules: IndexVec<ModuleIdx, ModuleNode>,
  /// Canonical identity to the node standing for it, including nodes still in flight.
  pub visited: FxHashMap<ModuleId, ModuleIdx>,
}

impl ModuleGraph {
  fn push(&mut self, id: ModuleId) -> ModuleIdx {
    let idx = ModuleIdx::from_usize(self.modules.len());
    tracing::debug!(idx = idx.index(), file = %id, "allocated module");
    self.modules.push(ModuleNode::new(idx, id))
  }

  /// Allocates a node for a file added explicitly. Such a file always gets a node of its own;
  /// it only claims the cache slot when its identity hasn't been seen yet.
  pub fn alloc_module(&mut self, id: ModuleId) -> ModuleIdx {
    let idx = self.push(id.clone());
    self.visited.entry(id).or_insert(idx);
    idx
  }

  /// Returns the node for `id`, allocating and caching it first if needed. The cache entry is
  /// written before the caller recurses, so a cycle back to `id` finds the in-flight node.
  pub fn try_alloc_module(&mut self, id: ModuleId) -> Linked {
    if let Some(&idx) = self.visited.get(&id) {
      tracing::trace!(idx = idx.index(), file = %id, "module cache hit");
      return Linked::Visited(idx);
    }
    let path = id.as_path().to_path_buf();
    let idx = self.push(id.clone());
    self.visited.insert(id, idx);
    Linked::New(idx, path)
  }

  pub fn entry(&self) -> Option<&ModuleNode> {
    self.modules.raw.first()
  }

  pub fn set_source(&mut self, idx: ModuleIdx, source: String) {
    self.modules[idx].source = Some(source);
  }

  pub fn bind_dep(&mut self, idx: ModuleIdx, name: String, dep: ModuleIdx) {
    self.modules[idx].deps.insert(name, dep);
  }

  pub fn to_vec(&self) -> Vec<ModuleNode> {
    self.modules.raw.clone()
  }
}
