pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::{mask_secret, plural};
pub use path::expand_tilde;
pub use time::parse_window;
