/// 1-bit dithering engine for bitrame.
///
/// Converts luminance grids to binary grids via error diffusion.

pub mod floyd_steinberg;

pub use floyd_steinberg::{diffuse_in_place, dither};
