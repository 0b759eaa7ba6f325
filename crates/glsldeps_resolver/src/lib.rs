// A wrapper around the `oxc_resolver` crate to provide a shader-specific API.

mod module_resolver;
mod resolver;

pub use crate::{
  module_resolver::ModuleResolver,
  resolver::{Resolver, DEFAULT_EXTENSIONS, DEFAULT_MAIN_FIELDS},
};
