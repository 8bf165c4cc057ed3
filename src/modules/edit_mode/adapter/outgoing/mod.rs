mod atomic_edit_mode_store;

pub use atomic_edit_mode_store::AtomicEditModeStore;
