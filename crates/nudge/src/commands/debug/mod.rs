pub mod list;
pub mod plan;
