pub mod edit_mode;
pub mod layout;
pub mod portfolio;
