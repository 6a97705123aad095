mod body;
mod catalog;

pub use body::*;
pub use catalog::*;
