//! Domain model for foraging log entries and the schema that admits them.

pub mod errors;
pub mod forage_item;
pub mod schema;

pub use errors::{FieldError, ValidationErrors};
pub use forage_item::ForageItem;
pub use schema::validate_item;
