use serde_json::Value;

use crate::{Transform, TransformOptions, TransformRef, GLOBAL_FLAG, POST_FLAG};

/// A transform as registered or declared in a config file, not loaded yet.
#[derive(Debug, Clone)]
pub struct TransformDefinition {
  pub name: String,
  pub transform: TransformRef,
  pub options: TransformOptions,
}

impl TransformDefinition {
  pub fn new(transform: TransformRef, options: TransformOptions) -> Self {
    Self { name: transform.name().to_string(), transform, options }
  }
}

/// A loaded transform plus the options it runs with.
#[derive(Debug, Clone)]
pub struct TransformEntry {
  pub name: String,
  pub transform: Transform,
  pub options: TransformOptions,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformFlags {
  /// Applies to every file, vendored ones included, after config-declared transforms.
  pub global: bool,
  /// Reserved for a post-bundling stage, never applied while building the graph.
  pub post: bool,
}

impl TransformFlags {
  /// Removes the control flags from `options` and reports which were set.
  ///
  /// Any truthy value sets a flag: `1`, `"yes"` and `{}` count, `0`, `""` and `null` don't.
  pub fn take_from(options: &mut TransformOptions) -> Self {
    let mut take = |key: &str| options.remove(key).is_some_and(|value| is_truthy(&value));
    Self { global: take(GLOBAL_FLAG), post: take(POST_FLAG) }
  }
}

fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

#[test]
fn test_take_flags_strips_reserved_keys() {
  let mut options = serde_json::json!({ "global": true, "post": false, "option-1": true })
    .as_object()
    .cloned()
    .unwrap();

  let flags = TransformFlags::take_from(&mut options);

  assert_eq!(flags, TransformFlags { global: true, post: false });
  assert!(!options.contains_key("global"));
  assert!(!options.contains_key("post"));
  assert_eq!(options["option-1"], true);
}

#[test]
fn test_flags_follow_truthiness() {
  let mut options = serde_json::json!({ "global": 1, "post": "" }).as_object().cloned().unwrap();
  assert_eq!(TransformFlags::take_from(&mut options), TransformFlags { global: true, post: false });

  let mut options = serde_json::json!({ "global": 0, "post": "yes" }).as_object().cloned().unwrap();
  assert_eq!(TransformFlags::take_from(&mut options), TransformFlags { global: false, post: true });

  let mut options = serde_json::json!({ "global": null, "post": {} }).as_object().cloned().unwrap();
  assert_eq!(TransformFlags::take_from(&mut options), TransformFlags { global: false, post: true });
  assert!(options.is_empty());
}
