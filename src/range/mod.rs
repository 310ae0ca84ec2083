///
/// Text ranges and intersecting sorted collections of them
///
mod search;
mod sweep;
mod text_range;

pub use search::*;
pub use sweep::*;
pub use text_range::*;
