//! Page components for Neural Glass.

mod landing;

pub use landing::Landing;
