pub mod bmp;
pub mod color;
pub mod dimensions;
mod error;
pub mod extract;
pub mod parse;
pub mod pipeline;
mod types;

pub use color::Rgb888;
pub use error::{CoreError, Result};
pub use pipeline::{convert, Conversion};
pub use types::ImageData;
