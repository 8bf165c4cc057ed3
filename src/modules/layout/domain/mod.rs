mod section_order;

pub use section_order::{
    ReorderError, SectionDescriptor, SectionKind, SectionOrder, SetSectionsError,
};
