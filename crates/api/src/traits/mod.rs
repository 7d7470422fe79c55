//! Capability traits consumed by the handshake

pub mod group;

pub use group::Group;
