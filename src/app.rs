pub mod core;
pub mod settings;
pub mod types;

pub use self::core::{App, AppConfig, OnFile};
pub use types::{Focus, ImageFile, IntroEvent, Mode, Snackbar};
