pub mod analysis;
pub mod music;
pub mod price;

pub use analysis::*;
pub use music::*;
pub use price::*;
