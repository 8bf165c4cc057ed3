mod edit_mode_service;

pub use edit_mode_service::EditModeService;
