//! Intersections of sorted text ranges, e.g. changed lines against highlighted regions
//! during a checkin, plus the model behind a JDK selection box.

pub mod jdk;
pub mod range;

pub use range::{
    Intersections, SearchResult, TextRange, element_intersections, process_element_intersections,
    process_intersections,
};
