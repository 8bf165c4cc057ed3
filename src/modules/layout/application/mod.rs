pub mod layout_use_cases;
pub mod ports;
pub mod service;
