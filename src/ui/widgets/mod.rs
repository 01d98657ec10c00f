pub mod blob_field;
pub mod demo_strip;
pub mod footer;
pub mod header;
pub mod install_banner;
pub mod load_panel;
pub mod modal;
pub mod snackbar;
