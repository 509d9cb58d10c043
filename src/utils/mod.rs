pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::ellipsize;
pub use formatting::pad_right;
