mod card;
pub use card::*;

mod root;
pub use root::Root;
