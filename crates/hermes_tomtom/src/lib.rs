mod aligner;
pub mod coordinate;
pub mod coordinate_index;
pub mod decoder;
pub mod error;
pub mod maneuver;
pub mod meters;
pub mod params;
pub mod reply;
pub mod request;
pub mod route;
pub mod segment;
mod segment_builder;
mod timing;
pub mod wire;

pub use aligner::InstructionAligner;
pub use decoder::decode;

#[cfg(test)]
pub(crate) mod test_utils;
