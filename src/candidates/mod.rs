pub mod case;
pub mod combination;
pub mod generate;
pub mod leet;
pub mod product;
pub mod substitution;
pub mod suffix;

pub use case::*;
pub use combination::*;
pub use generate::*;
pub use leet::*;
pub use product::*;
pub use substitution::*;
pub use suffix::*;
