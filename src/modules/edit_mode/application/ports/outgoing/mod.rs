mod edit_mode_store;

pub use edit_mode_store::EditModeStore;
