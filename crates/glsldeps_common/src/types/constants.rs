/// Marker following `#pragma` on lines the scanner cares about.
pub static PRAGMA_MARKER: &str = "glslify";

/// Config file searched for upward from each module's directory.
pub static CONFIG_FILE_NAME: &str = "package.json";

/// Registration-time flags, consumed and never forwarded to a transform.
pub static GLOBAL_FLAG: &str = "global";
pub static POST_FLAG: &str = "post";

/// File name prefix of synthetic identities given to inline sources.
pub static INLINE_NAME_PREFIX: &str = "__INLINE__";

pub const DEFAULT_PARALLEL: usize = 10;
