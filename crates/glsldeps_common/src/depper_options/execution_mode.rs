/// How a graph runs its collaborators. Chosen once per graph.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
  /// Every read, resolve and transform blocks; the build is a depth-first recursion.
  #[default]
  Sync,
  /// Collaborators are awaited; sibling imports are processed concurrently.
  Async,
}

impl ExecutionMode {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Sync => "sync",
      Self::Async => "async",
    }
  }
}

impl std::fmt::Display for ExecutionMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
