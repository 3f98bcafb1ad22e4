pub mod optional;
pub mod error;
pub mod build_info;


pub use optional::*;
pub use error::*;
