use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use glsldeps_error::{DepsError, DepsResult};

use crate::{TransformDefinition, TransformFlags, TransformOptions, TransformRef};

/// The parts of a `package.json` the graph reads: the transforms it declares.
#[derive(Debug, Clone, Default)]
pub struct PackageJson {
  pub transforms: Vec<TransformDefinition>,
}

#[derive(Deserialize)]
struct RawPackageJson {
  /// An object holding `transform`, or a string naming the package's shader entry.
  #[serde(default)]
  glslify: Value,
}

#[derive(Deserialize)]
struct RawConfig {
  #[serde(default)]
  transform: Option<Vec<RawTransformDeclaration>>,
}

/// `"name"`, `["name"]` or `["name", { ...options }]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTransformDeclaration {
  Name(String),
  Bare((String,)),
  WithOptions(String, Value),
}

impl PackageJson {
  pub fn parse(path: &Path, content: &str) -> DepsResult<Self> {
    let parse_error = |source| DepsError::ConfigParse { path: path.to_path_buf(), source };

    let raw: RawPackageJson = serde_json::from_str(content).map_err(parse_error)?;
    // Only the object form declares transforms.
    if !raw.glslify.is_object() {
      return Ok(Self::default());
    }
    let config: RawConfig = serde_json::from_value(raw.glslify).map_err(parse_error)?;

    let transforms = config
      .transform
      .unwrap_or_default()
      .into_iter()
      .map(|declaration| {
        let (name, mut options) = match declaration {
          RawTransformDeclaration::Name(name) | RawTransformDeclaration::Bare((name,)) => {
            (name, TransformOptions::default())
          }
          RawTransformDeclaration::WithOptions(name, Value::Object(options)) => (name, options),
          RawTransformDeclaration::WithOptions(name, _) => (name, TransformOptions::default()),
        };
        // Config files can't opt into the global or post stages.
        TransformFlags::take_from(&mut options);
        TransformDefinition::new(TransformRef::Named(name), options)
      })
      .collect();

    Ok(Self { transforms })
  }
}

#[test]
fn test_parse_transform_declarations() {
  let content = r#"{
    "name": "fixture",
    "glslify": {
      "transform": [
        "glslify-plain",
        ["glslify-hex", { "option-1": true, "option-2": 42, "post": true, "global": true }]
      ]
    }
  }"#;

  let pkg = PackageJson::parse(Path::new("/project/package.json"), content).unwrap();
  assert_eq!(pkg.transforms.len(), 2);

  assert_eq!(pkg.transforms[0].name, "glslify-plain");
  assert!(pkg.transforms[0].options.is_empty());

  let hex = &pkg.transforms[1];
  assert_eq!(hex.name, "glslify-hex");
  assert_eq!(hex.options["option-1"], true);
  assert_eq!(hex.options["option-2"], 42);
  assert!(!hex.options.contains_key("post"));
  assert!(!hex.options.contains_key("global"));
}

#[test]
fn test_parse_without_config_key() {
  let pkg = PackageJson::parse(Path::new("/project/package.json"), r#"{ "name": "plain" }"#).unwrap();
  assert!(pkg.transforms.is_empty());
}

#[test]
fn test_malformed_json_is_attributed_to_file() {
  let err = PackageJson::parse(Path::new("/project/package.json"), "{ not json").unwrap_err();
  match err {
    DepsError::ConfigParse { path, .. } => assert_eq!(path, Path::new("/project/package.json")),
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn test_string_entry_field_declares_no_transforms() {
  let content = r#"{ "name": "glsl-noise", "glslify": "simplex.glsl" }"#;
  let pkg = PackageJson::parse(Path::new("/project/node_modules/glsl-noise/package.json"), content)
    .unwrap();
  assert!(pkg.transforms.is_empty());

  let pkg = PackageJson::parse(Path::new("/project/package.json"), r#"{ "glslify": null }"#).unwrap();
  assert!(pkg.transforms.is_empty());
}

#[test]
fn test_short_and_null_declarations() {
  let content = r#"{ "glslify": { "transform": [["glslify-hex"], ["glslify-plain", null]] } }"#;
  let pkg = PackageJson::parse(Path::new("/project/package.json"), content).unwrap();

  let names: Vec<_> = pkg.transforms.iter().map(|definition| definition.name.as_str()).collect();
  assert_eq!(names, ["glslify-hex", "glslify-plain"]);
  assert!(pkg.transforms.iter().all(|definition| definition.options.is_empty()));

  let pkg =
    PackageJson::parse(Path::new("/project/package.json"), r#"{ "glslify": { "transform": null } }"#)
      .unwrap();
  assert!(pkg.transforms.is_empty());
}
