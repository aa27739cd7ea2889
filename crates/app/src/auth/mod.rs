//! Authentication

mod gate;

pub use gate::*;
