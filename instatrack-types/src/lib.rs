pub mod models;
pub mod enums;
pub mod views;

pub use models::*;
pub use enums::*;
pub use views::*;
