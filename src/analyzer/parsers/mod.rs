pub mod element;
pub mod primitives;

pub use element::*;
pub use primitives::*;
