// 🍷 Drinks - capability traits and two unrelated implementers
//
// `Wine` and `Cocktail` share no state, only the `AlcoholicDrink`
// contract. `show_drinks` sees nothing but that contract.

// ============================================================================
// CAPABILITIES
// ============================================================================

pub trait Drink {
    fn name(&self) -> &str;
}

pub trait AlcoholicDrink: Drink {
    fn alcohol(&self) -> f64;

    /// One-line description of the drink
    fn show_info(&self) -> String;
}

pub trait MixedDrink {
    fn ingredients(&self) -> &[String];
}

// ============================================================================
// WINE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Wine {
    pub name: String,
    pub alcohol: f64,
}

impl Wine {
    pub fn new(name: impl Into<String>, alcohol: f64) -> Self {
        Wine {
            name: name.into(),
            alcohol,
        }
    }
}

impl Drink for Wine {
    fn name(&self) -> &str {
        &self.name
    }
}

impl AlcoholicDrink for Wine {
    fn alcohol(&self) -> f64 {
        self.alcohol
    }

    fn show_info(&self) -> String {
        format!("info: {} {}", self.name, self.alcohol)
    }
}

// ============================================================================
// COCKTAIL
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Cocktail {
    pub name: String,
    pub alcohol: f64,

    /// Ordered, duplicates allowed
    pub ingredients: Vec<String>,
}

impl Cocktail {
    pub fn new<I, S>(name: impl Into<String>, alcohol: f64, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Cocktail {
            name: name.into(),
            alcohol,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// Ingredients folded into one segment: `" " + item + ", "` per item.
    ///
    /// The trailing `", "` after the last item is kept.
    pub fn ingredients_info(&self) -> String {
        self.ingredients
            .iter()
            .fold(String::new(), |acc, item| acc + " " + item + ", ")
    }
}

impl Drink for Cocktail {
    fn name(&self) -> &str {
        &self.name
    }
}

impl AlcoholicDrink for Cocktail {
    fn alcohol(&self) -> f64 {
        self.alcohol
    }

    fn show_info(&self) -> String {
        format!(
            "info: {} {} ingredients: {}",
            self.name,
            self.alcohol,
            self.ingredients_info()
        )
    }
}

impl MixedDrink for Cocktail {
    fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}

// ============================================================================
// LISTING
// ============================================================================

/// One info line per drink, in input order
pub fn show_drinks(drinks: &[&dyn AlcoholicDrink]) -> Vec<String> {
    drinks.iter().map(|d| d.show_info()).collect()
}
