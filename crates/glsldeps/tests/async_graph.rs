mod common;

use std::{path::Path, sync::Arc};

use serde_json::json;

use common::{async_depper, dep, memory_fs, node, options, registry};
use futures::FutureExt;
use glsldeps::{
  ConfigurationError, Depper, DepsError, ExecutionMode, Transform, TransformOptions,
  TransformRequire,
};

const PKG: &str = r#"{ "name": "fixture", "glslify": { "transform": ["config-t"] } }"#;

fn opts(value: serde_json::Value) -> TransformOptions {
  value.as_object().cloned().unwrap()
}

async fn names(depper: &Depper, file: &str) -> Vec<String> {
  depper
    .transforms_for_file_async(Path::new(file))
    .await
    .unwrap()
    .iter()
    .map(|entry| entry.name.clone())
    .collect()
}

fn diamond() -> Arc<glsldeps_fs::MemoryFileSystem> {
  memory_fs(&[
    (
      "/project/index.glsl",
      "#pragma glslify: b = require(./b.glsl)\n#pragma glslify: c = require(./c.glsl)\n",
    ),
    ("/project/b.glsl", "float b;\n"),
    ("/project/c.glsl", "#pragma glslify: b = require(./b.glsl)\n"),
  ])
}

#[tokio::test]
async fn test_single_file_without_pragmas() {
  let fs = memory_fs(&[("/project/index.glsl", "void main() {}\n")]);
  let nodes = async_depper(&fs).add_async("/project/index.glsl").await.unwrap();

  assert_eq!(nodes.len(), 1);
  assert!(nodes[0].entry);
  assert_eq!(nodes[0].source.as_deref(), Some("void main() {}\n"));
  assert!(nodes[0].deps.is_empty());
}

#[tokio::test]
async fn test_diamond_builds_shared_dependency_once() {
  let fs = diamond();
  let nodes = async_depper(&fs).add_async("/project/index.glsl").await.unwrap();

  assert_eq!(nodes.len(), 3);
  let entry = node(&nodes, "/project/index.glsl");
  let c = node(&nodes, "/project/c.glsl");
  assert_eq!(entry.id.index(), 0);
  assert_eq!(dep(entry, "b"), dep(c, "b"));
  assert_eq!(fs.read_count(Path::new("/project/b.glsl")), 1);
  assert!(nodes.iter().all(|node| node.source.is_some()));
}

#[tokio::test]
async fn test_siblings_are_linked_in_pragma_order() {
  let fs = memory_fs(&[
    (
      "/project/index.glsl",
      "#pragma glslify: b = require(./b.glsl)\n#pragma glslify: c = require(./c.glsl)\n",
    ),
    ("/project/b.glsl", "#pragma glslify: d = require(./d.glsl)\n"),
    ("/project/c.glsl", ""),
    ("/project/d.glsl", ""),
  ]);
  let nodes = async_depper(&fs).add_async("/project/index.glsl").await.unwrap();

  let files: Vec<_> = nodes.iter().map(|node| node.file.to_string()).collect();
  assert_eq!(files, ["/project/index.glsl", "/project/b.glsl", "/project/c.glsl", "/project/d.glsl"]);
  let deps: Vec<_> = nodes[0].deps.keys().map(String::as_str).collect();
  assert_eq!(deps, ["b", "c"]);
}

#[tokio::test]
async fn test_identical_inputs_yield_identical_graphs() {
  let first = async_depper(&diamond()).add_async("/project/index.glsl").await.unwrap();
  let second = async_depper(&diamond()).add_async("/project/index.glsl").await.unwrap();
  assert_eq!(first, second);
}

#[tokio::test]
async fn test_fan_out_of_one_still_completes() {
  let fs = diamond();
  let depper =
    Depper::new(glsldeps::DepperOptions { parallel: Some(1), ..options(&fs, ExecutionMode::Async) })
      .unwrap();

  let nodes = depper.add_async("/project/index.glsl").await.unwrap();
  assert_eq!(nodes.len(), 3);
}

#[tokio::test]
async fn test_cycles_bind_to_the_in_flight_node() {
  let fs = memory_fs(&[
    ("/project/a.glsl", "#pragma glslify: b = require(./b.glsl)\n"),
    ("/project/b.glsl", "#pragma glslify: a = require(./a.glsl)\n"),
  ]);
  let nodes = async_depper(&fs).add_async("/project/a.glsl").await.unwrap();

  assert_eq!(nodes.len(), 2);
  assert_eq!(dep(&nodes[0], "b"), 1);
  assert_eq!(dep(&nodes[1], "a"), 0);
}

#[tokio::test]
async fn test_async_and_sync_transforms_are_applied_in_order() {
  let fs = memory_fs(&[("/project/index.glsl", "src")]);
  let mut depper = async_depper(&fs);
  depper
    .transform("local-t", TransformOptions::default())
    .transform(
      Transform::new_async("upper", |_, src, _| async move { Ok(src.to_uppercase()) }.boxed()),
      TransformOptions::default(),
    )
    .transform(
      Transform::new_sync("both", |_, src, _| Ok(format!("{src} sync")))
        .with_async(|_, src, _| async move { Ok(format!("{src} async")) }.boxed()),
      TransformOptions::default(),
    );

  let nodes = depper.add_async("/project/index.glsl").await.unwrap();
  assert_eq!(nodes[0].source.as_deref(), Some("SRC\n// LOCAL-T async"));
}

#[tokio::test]
async fn test_async_loader_resolves_named_transforms() {
  let fs = memory_fs(&[
    ("/project/package.json", r#"{ "glslify": { "transform": ["config-t"] } }"#),
    ("/project/index.glsl", "src"),
  ]);
  let depper = Depper::new(glsldeps::DepperOptions {
    transform_require: Some(TransformRequire::Async(Arc::new(registry()))),
    ..options(&fs, ExecutionMode::Async)
  })
  .unwrap();

  let nodes = depper.add_async("/project/index.glsl").await.unwrap();
  assert_eq!(nodes[0].source.as_deref(), Some("src\n// config-t"));

  let transforms = depper.transforms_for_file_async(Path::new("/project/index.glsl")).await.unwrap();
  let output = depper
    .apply_transforms_async(Path::new("/project/b.glsl"), "b".to_string(), &transforms)
    .await
    .unwrap();
  assert_eq!(output, "b\n// config-t");
}

#[tokio::test]
async fn test_local_config_global_order() {
  let fs = memory_fs(&[("/project/package.json", PKG), ("/project/index.glsl", "src")]);
  let mut depper = async_depper(&fs);
  depper
    .transform("global-t", opts(json!({ "global": true })))
    .transform("local-t", TransformOptions::default());

  let nodes = depper.add_async("/project/index.glsl").await.unwrap();

  assert_eq!(nodes[0].source.as_deref(), Some("src\n// local-t\n// config-t\n// global-t"));
  assert_eq!(names(&depper, "/project/index.glsl").await, ["local-t", "config-t", "global-t"]);
}

#[tokio::test]
async fn test_vendored_files_skip_local_transforms() {
  let fs = memory_fs(&[
    ("/project/package.json", PKG),
    ("/project/index.glsl", "#pragma glslify: noise = require(glsl-noise)\n"),
    ("/project/node_modules/glsl-noise/package.json", r#"{ "name": "glsl-noise", "glslify": "index.glsl" }"#),
    ("/project/node_modules/glsl-noise/index.glsl", "float noise;"),
  ]);
  let mut depper = async_depper(&fs);
  depper
    .transform("local-t", TransformOptions::default())
    .transform("global-t", opts(json!({ "global": true })));

  let nodes = depper.add_async("/project/index.glsl").await.unwrap();

  assert_eq!(nodes[0].source.as_deref(), Some("#pragma glslify: noise = require(glsl-noise)\n\n// local-t\n// config-t\n// global-t"));
  assert_eq!(nodes[1].source.as_deref(), Some("float noise;\n// global-t"));
  assert_eq!(names(&depper, "/project/node_modules/glsl-noise/index.glsl").await, ["global-t"]);
}

#[tokio::test]
async fn test_post_transforms_never_run() {
  let fs = memory_fs(&[("/project/index.glsl", "src")]);
  let mut depper = async_depper(&fs);
  depper
    .transform("post-t", opts(json!({ "post": true })))
    .transform("post-t", opts(json!({ "post": true, "global": true })));

  let nodes = depper.add_async("/project/index.glsl").await.unwrap();

  assert_eq!(nodes[0].source.as_deref(), Some("src"));
  assert!(names(&depper, "/project/index.glsl").await.is_empty());
}

#[tokio::test]
async fn test_inline_entry() {
  let fs = memory_fs(&[("/project/b.glsl", "")]);
  let nodes = async_depper(&fs)
    .inline_async("#pragma glslify: b = require(./b.glsl)\n", None)
    .await
    .unwrap();

  assert_eq!(&*nodes[0].file, "/project/__INLINE__0");
  assert_eq!(dep(&nodes[0], "b"), 1);
}

#[tokio::test]
async fn test_subscribers_see_every_file() {
  let fs = diamond();
  let depper = async_depper(&fs);
  let mut files = depper.subscribe();

  depper.add_async("/project/index.glsl").await.unwrap();

  let mut seen = Vec::new();
  while let Ok(file) = files.try_recv() {
    seen.push(file);
  }
  assert_eq!(seen.len(), 3);
  assert_eq!(seen[0], Path::new("/project/index.glsl"));
}

#[tokio::test]
async fn test_errors_propagate_from_siblings() {
  let fs = memory_fs(&[
    (
      "/project/index.glsl",
      "#pragma glslify: b = require(./b.glsl)\n#pragma glslify: c = require(./c.glsl)\n",
    ),
    ("/project/b.glsl", ""),
    ("/project/c.glsl", "#pragma glslify: x = require(./missing.glsl)\n"),
  ]);
  let err = async_depper(&fs).add_async("/project/index.glsl").await.unwrap_err();

  assert!(matches!(err, DepsError::Resolution { ref specifier, .. } if specifier == "./missing.glsl"));
}

#[test]
fn test_sync_calls_on_an_async_graph_are_rejected() {
  let fs = memory_fs(&[("/project/index.glsl", "")]);
  let depper = async_depper(&fs);

  let err = depper.add("/project/index.glsl").unwrap_err();
  assert!(matches!(
    err,
    DepsError::Configuration(ConfigurationError::ModeMismatch { mode: "async", called: "add" })
  ));
  assert!(depper.inline("", None).unwrap_err().is_configuration());
  assert!(depper.nodes().is_empty());
}
