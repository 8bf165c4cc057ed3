mod in_memory_section_order_repository;

pub use in_memory_section_order_repository::InMemorySectionOrderRepository;
