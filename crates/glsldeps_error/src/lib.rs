use std::path::PathBuf;

/// Raised eagerly while constructing a graph, never retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
  #[error("glsldeps: {0} must be defined")]
  MissingCollaborator(&'static str),

  #[error(
    "glsldeps: async transform loader detected in a sync context, \
     please ensure your loader matches the execution mode"
  )]
  AsyncInSyncContext,

  #[error("glsldeps: `{called}` is not available on a graph created in {mode} mode")]
  ModeMismatch { mode: &'static str, called: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum PreconditionError {
  #[error("transforms_for_file may only be called after adding your entry file")]
  NoEntryYet,
}

#[derive(Debug, thiserror::Error)]
pub enum DepsError {
  #[error(transparent)]
  Configuration(#[from] ConfigurationError),

  #[error(transparent)]
  Precondition(#[from] PreconditionError),

  #[error("Could not read {} - {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Malformed config file {} - {source}", path.display())]
  ConfigParse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Could not resolve '{specifier}' from {} - {reason}", from.display())]
  Resolution { specifier: String, from: PathBuf, reason: String },

  #[error("Transform '{name}' failed on {} - {source}", file.display())]
  Transform {
    file: PathBuf,
    name: String,
    #[source]
    source: anyhow::Error,
  },

  #[error("Could not load transform '{name}' - {source}")]
  TransformLoad {
    name: String,
    #[source]
    source: anyhow::Error,
  },

  #[error("transform {name} does not provide a synchronous interface")]
  MissingSyncInterface { name: String },
}

impl DepsError {
  pub fn is_configuration(&self) -> bool {
    matches!(self, Self::Configuration(_))
  }
}

pub type DepsResult<T> = Result<T, DepsError>;

#[test]
fn test_error_messages_name_the_culprit() {
  let err = DepsError::Transform {
    file: PathBuf::from("/shaders/index.glsl"),
    name: "glslify-hex".to_string(),
    source: anyhow::anyhow!("unexpected token"),
  };
  assert_eq!(
    err.to_string(),
    "Transform 'glslify-hex' failed on /shaders/index.glsl - unexpected token"
  );

  let err = DepsError::MissingSyncInterface { name: "glslify-async".to_string() };
  assert_eq!(err.to_string(), "transform glslify-async does not provide a synchronous interface");
}

#[test]
fn test_configuration_errors_convert() {
  let err: DepsError = ConfigurationError::AsyncInSyncContext.into();
  assert!(err.is_configuration());

  let err: DepsError = PreconditionError::NoEntryYet.into();
  assert!(!err.is_configuration());
}
