pub mod codec;
pub mod error;
pub mod id;
pub mod validate;

pub use codec::*;
pub use error::*;
pub use id::*;
pub use validate::*;
