pub mod transform_entry;
pub mod transform_fn;
pub mod transform_loader;
