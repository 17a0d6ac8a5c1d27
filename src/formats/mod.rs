//! File format support
//!
//! - [`scw`] - SCW4.x binary script containers
//! - [`document`] - the editable text form of a container's string table

pub mod document;
pub mod scw;
