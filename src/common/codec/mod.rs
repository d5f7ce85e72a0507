pub mod decoder;
pub mod encoder;
pub mod types;

pub use decoder::*;
pub use encoder::*;
pub use types::*;
