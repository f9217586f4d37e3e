
pub use graphs::*;
