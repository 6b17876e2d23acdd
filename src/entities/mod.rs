// Entity Models
//
// Each entity is a short-lived in-memory value:
// - Snacks: structural records and their merged combo
// - Drinks: capability traits shared by unrelated types
// - Account: guarded mutation with a derived total

pub mod snack;
pub mod drink;
pub mod account;

pub use snack::{Beer, Snack, Combo, show};
pub use drink::{Drink, AlcoholicDrink, MixedDrink, Wine, Cocktail, show_drinks};
pub use account::Account;
