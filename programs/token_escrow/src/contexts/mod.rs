pub mod abort;
pub mod execute;
pub mod open;

pub use abort::*;
pub use execute::*;
pub use open::*;
