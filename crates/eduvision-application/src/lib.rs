//! Application layer for EduVision: image preparation and request
//! coordination.

pub mod coordinator;
pub mod image_preprocessor;

pub use coordinator::{RequestCoordinator, Submission};
pub use image_preprocessor::{ImagePreprocessor, ImageSource, bounded_dimensions, resize_bitmap};
