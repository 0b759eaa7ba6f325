use std::sync::Arc;

use glsldeps_common::{NormalizedDepperOptions, TransformEntry};

pub type SharedOptions = Arc<NormalizedDepperOptions>;

/// The ordered transforms of one directory, shared by every file in it.
pub type SharedTransforms = Arc<[TransformEntry]>;
