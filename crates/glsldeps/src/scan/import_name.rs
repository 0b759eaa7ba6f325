/// The resolver-facing specifier of a raw `require(...)` argument list: the first
/// comma-separated field, trimmed, with one layer of surrounding quotes removed.
pub fn import_name(raw: &str) -> &str {
  let first = raw.split(',').next().unwrap_or_default().trim();
  let first = strip_quote(first, '\'');
  strip_quote(first, '"')
}

fn strip_quote(s: &str, quote: char) -> &str {
  let s = s.strip_prefix(quote).unwrap_or(s);
  s.strip_suffix(quote).unwrap_or(s)
}

#[test]
fn test_import_name() {
  assert_eq!(import_name("./a.glsl"), "./a.glsl");
  assert_eq!(import_name("  './a.glsl'  "), "./a.glsl");
  assert_eq!(import_name("\"glsl-noise/simplex/3d\", a = b"), "glsl-noise/simplex/3d");
  assert_eq!(import_name("'./light.glsl' ,color=vec3"), "./light.glsl");
  assert_eq!(import_name("\"'nested'\""), "'nested'");
  assert_eq!(import_name(""), "");
}
