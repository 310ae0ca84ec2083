///
/// Model behind a box for choosing the JDK an external build tool runs with.
/// Rendering is left to the host, which supplies its SDK table through [`SdkRegistry`].
///
mod host;
mod item;
mod selection;

pub use host::*;
pub use item::*;
pub use selection::*;

/// Pseudo SDK names, stored instead of a real SDK name
pub const USE_INTERNAL_JAVA: &str = "#JAVA_INTERNAL";
pub const USE_PROJECT_JDK: &str = "#USE_PROJECT_JDK";
pub const USE_JAVA_HOME: &str = "#JAVA_HOME";

pub const JAVA_HOME_VAR: &str = "JAVA_HOME";
