pub mod components;

pub mod element;

pub mod theme;

pub mod views;

mod error;
pub use error::*;

pub use tesserae_theme::SharedString;
