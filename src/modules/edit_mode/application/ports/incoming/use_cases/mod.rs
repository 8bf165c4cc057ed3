mod edit_mode;

pub use edit_mode::EditModeUseCase;
