mod depper;
mod graph;
mod module_loader;
mod scan;
mod transform;
mod types;
mod utils;

pub use crate::{
  depper::Depper,
  scan::{extract_pragmas, import_name, scan_directives, Directive, PragmaImport, ScanResult},
  transform::{apply_transforms, apply_transforms_async},
  types::SharedTransforms,
};
pub use glsldeps_common::*;
pub use glsldeps_error::{ConfigurationError, DepsError, DepsResult, PreconditionError};
pub use glsldeps_fs::{FileSystem, OsFileSystem};
pub use glsldeps_resolver::{ModuleResolver, Resolver};
