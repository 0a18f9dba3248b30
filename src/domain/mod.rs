//! Domain logic - pure version arithmetic independent of pipeline I/O

pub mod level;
pub mod version;

pub use level::IncrementLevel;
pub use version::{IncrementedVersion, VersionInput};
