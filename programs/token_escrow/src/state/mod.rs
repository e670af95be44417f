pub mod custody;
pub mod escrow;

pub use custody::*;
pub use escrow::*;
