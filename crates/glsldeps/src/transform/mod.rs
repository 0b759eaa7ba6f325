mod apply;
mod resolve;
mod select;

pub use apply::{apply_transforms, apply_transforms_async};
