//! Route handlers organized by access level.

pub mod public;
pub mod secured;
