// Typed Store - Core Library
// Exposes every demonstration for the CLI walkthrough and tests

pub mod basics;
pub mod sale;
pub mod entities;
pub mod walkthrough;

// Re-export commonly used types
pub use basics::{Declarations, sum};
pub use sale::{Sale, SaleWithTaxes, Total};
pub use entities::{
    Beer, Snack, Combo, show,
    Drink, AlcoholicDrink, MixedDrink, Wine, Cocktail, show_drinks,
    Account,
};
pub use walkthrough::run;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
