//! State Management
//!
//! Global reactive state plus the plain form/slug state types the pages
//! drive through signals.

pub mod forms;
pub mod global;
pub mod slug;
