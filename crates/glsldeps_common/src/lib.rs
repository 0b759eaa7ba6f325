mod depper_options;
mod transform;
mod types;

pub use crate::{
  depper_options::{
    execution_mode::ExecutionMode, normalized_depper_options::NormalizedDepperOptions,
    DepperOptions,
  },
  transform::{
    transform_entry::{TransformDefinition, TransformEntry, TransformFlags},
    transform_fn::{AsyncTransformFn, SyncTransformFn, Transform, TransformOptions, TransformRef},
    transform_loader::{AsyncTransformLoader, TransformLoader, TransformRegistry, TransformRequire},
  },
  types::{
    constants::{
      CONFIG_FILE_NAME, DEFAULT_PARALLEL, GLOBAL_FLAG, INLINE_NAME_PREFIX, POST_FLAG, PRAGMA_MARKER,
    },
    module_id::ModuleId,
    module_node::ModuleNode,
    package_json::PackageJson,
    raw_idx::ModuleIdx,
  },
};
