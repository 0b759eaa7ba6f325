use serde::Serialize;

use glsldeps_utils::collections::FxIndexMap;

use crate::{ModuleId, ModuleIdx};

/// One module of the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleNode {
  pub id: ModuleIdx,
  pub file: ModuleId,
  /// Transformed source. `None` until the module has been read and transformed.
  pub source: Option<String>,
  /// Import name, as bound by the pragma, to the index of the resolved module. Ordered by the
  /// appearance of the pragmas in the source.
  pub deps: FxIndexMap<String, ModuleIdx>,
  pub entry: bool,
}

impl ModuleNode {
  pub fn new(id: ModuleIdx, file: ModuleId) -> Self {
    Self { entry: id.index() == 0, id, file, source: None, deps: FxIndexMap::default() }
  }
}

#[test]
fn test_only_first_node_is_entry() {
  let entry = ModuleNode::new(ModuleIdx::from_usize(0), ModuleId::new("/a.glsl"));
  let dep = ModuleNode::new(ModuleIdx::from_usize(1), ModuleId::new("/b.glsl"));

  assert!(entry.entry);
  assert!(!dep.entry);
  assert!(dep.source.is_none());
  assert!(dep.deps.is_empty());
}
