mod catalog;
mod column;
mod identifier;
mod query;

pub use catalog::*;
pub use column::*;
pub use identifier::*;
pub use query::*;
