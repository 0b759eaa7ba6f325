mod directives;
mod import_name;

use std::sync::LazyLock;

use regex::Regex;

use glsldeps_common::PRAGMA_MARKER;

pub use directives::{scan_directives, Directive};
pub use import_name::import_name;

static PRAGMA_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(r"^pragma\s+{}\s*:\s*(.*)$", regex::escape(PRAGMA_MARKER))).unwrap()
});

static EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^export\(([^)]+)\)").unwrap());

static IMPORT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^([^=\s]+)\s*=\s*require\(([^)]+)\)").unwrap());

/// `foo = require(./foo.glsl, bar = baz)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PragmaImport {
  /// `foo`, the binding the importing module refers to the dependency by.
  pub name: String,
  /// `./foo.glsl, bar = baz`, the raw text inside `require(...)`. Trailing arguments are for
  /// the shader-level import and are stripped with [`import_name`] before resolution.
  pub specifier: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
  pub imports: Vec<PragmaImport>,
  pub exports: Vec<String>,
}

/// Collects the import and export pragmas of a shader source.
pub fn extract_pragmas(source: &str) -> ScanResult {
  let mut result = ScanResult::default();

  for directive in scan_directives(source) {
    let Some(body) = PRAGMA_RE.captures(&directive.text).and_then(|caps| caps.get(1)) else {
      continue;
    };
    let body = body.as_str();

    if let Some(caps) = EXPORT_RE.captures(body) {
      result.exports.push(caps[1].to_string());
    }
    if let Some(caps) = IMPORT_RE.captures(body) {
      result.imports.push(PragmaImport { name: caps[1].to_string(), specifier: caps[2].to_string() });
    }
  }

  result
}
