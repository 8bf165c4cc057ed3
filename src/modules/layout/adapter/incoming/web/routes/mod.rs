mod get_sections;
mod reorder_sections;
mod replace_sections;

pub use get_sections::*;
pub use reorder_sections::*;
pub use replace_sections::*;
