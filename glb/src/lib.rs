#![doc = include_str!("../README.md")]

mod asset;
mod chunk;
mod chunk_type;
mod error;
mod glb;

pub use asset::*;
pub use chunk::*;
pub use chunk_type::*;
pub use error::*;
pub use glb::*;
