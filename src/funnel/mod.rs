pub mod definition;
pub mod magnitude;

pub use definition::*;
pub use magnitude::*;
