pub mod anim;
pub mod app;
pub mod input;
pub mod intro;
pub mod platform;
pub mod runner;
pub mod ui;

pub use crate::app::{App, AppConfig, Focus, ImageFile, IntroEvent, Mode};
