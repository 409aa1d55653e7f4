//! Themed components. Each one is handed a [`ThemeHandle`](crate::theme::ThemeHandle)
//! when it's built and reads the active tokens again on every render.

mod body;
pub use body::*;

mod button;
pub use button::*;

mod headline;
pub use headline::*;

mod image;
pub use image::*;
