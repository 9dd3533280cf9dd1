//!
//! Common utilities across the scanner and its hosts.
//!

pub mod file;
pub mod location;
pub mod source;

pub use file::*;
pub use location::*;
pub use source::*;
