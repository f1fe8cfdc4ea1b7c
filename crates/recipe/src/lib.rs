mod attribute;
mod command;
mod price;
mod query;
mod types;

pub use attribute::{Attribute, Catalog, CreateAttributeInput, Kind};
pub use command::*;
pub use price::{Price, PriceError};
pub use query::RecipesQuery;
pub use types::*;
