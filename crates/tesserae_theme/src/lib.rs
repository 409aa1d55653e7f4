//! Design tokens: the colors and typography of one theme.
//!
//! Every token set is total over the closed [`ColorRole`] and [`TextRole`]
//! sets, so a lookup for any role always succeeds.

use std::sync::Arc;

mod color;
pub use color::*;

mod deserializers;

mod error;
pub use error::*;

mod patch;
pub use patch::*;

mod roles;
pub use roles::*;

mod tokens;
pub use tokens::*;

mod typography;
pub use typography::*;

#[cfg(feature = "builtin")]
mod builtin;
#[cfg(feature = "builtin")]
pub use builtin::*;

pub type SharedString = Arc<str>;
