pub mod money;
pub mod pii;

pub use money::{Currency, Money};
pub use pii::Masked;
