pub mod forms;
pub mod portfolio_use_cases;
pub mod ports;
pub mod service;
