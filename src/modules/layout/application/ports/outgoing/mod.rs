mod section_order_repository;

pub use section_order_repository::{SectionOrderRepository, SectionOrderRepositoryError};
