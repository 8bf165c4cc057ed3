mod get_sections_service;
mod reorder_sections_service;
mod replace_sections_service;

pub use get_sections_service::GetSectionsService;
pub use reorder_sections_service::ReorderSectionsService;
pub use replace_sections_service::ReplaceSectionsService;
