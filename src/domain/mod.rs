pub mod order;
pub mod receipt;
pub mod outcome;

pub use order::*;
pub use receipt::*;
pub use outcome::*;
