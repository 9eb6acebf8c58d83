pub mod decode;
pub mod encode;

pub use decode::*;
pub use encode::*;
