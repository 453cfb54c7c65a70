//! Pure data structures shared by every component.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
