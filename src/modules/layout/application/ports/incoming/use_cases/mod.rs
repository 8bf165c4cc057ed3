mod get_sections;
mod reorder_sections;
mod replace_sections;

pub use get_sections::{GetSectionsError, GetSectionsUseCase};
pub use reorder_sections::{ReorderSectionsError, ReorderSectionsUseCase};
pub use replace_sections::{ReplaceSectionsError, ReplaceSectionsUseCase};
