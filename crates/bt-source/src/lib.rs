/// Image input modules for bitrame (loading, resizing).

pub mod image;
pub mod resize;

pub use image::load_grayscale;
pub use resize::resize_to_width;
