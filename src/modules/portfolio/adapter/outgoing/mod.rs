mod in_memory_portfolio_repository;

pub use in_memory_portfolio_repository::{InMemoryPortfolioRepository, SeedError};
