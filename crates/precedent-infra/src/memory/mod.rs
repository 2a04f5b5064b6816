//! Ancestry store implementations and the persisted-row validation boundary.

pub mod decode;
pub mod store;

pub use store::InMemoryAncestryStore;
