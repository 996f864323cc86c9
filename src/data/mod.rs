pub mod in_memory;
pub mod post_store;
