pub mod collections;
pub mod path_ext;
