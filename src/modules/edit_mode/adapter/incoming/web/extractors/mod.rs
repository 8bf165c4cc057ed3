mod edit_mode_guard;

pub use edit_mode_guard::EditModeEnabled;
