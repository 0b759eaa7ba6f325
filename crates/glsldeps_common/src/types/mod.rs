pub mod constants;
pub mod module_id;
pub mod module_node;
pub mod package_json;
pub mod raw_idx;
