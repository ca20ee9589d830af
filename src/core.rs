pub mod catalog;
pub mod config_patch;
pub mod launcher;
pub mod mod_backup;
pub mod mod_manager;
pub mod state_store;
