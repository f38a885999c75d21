pub mod errors;
pub mod math;

pub use errors::{CodecError, Stage};
pub use math::BaseConverter;
