// ▶️ Walkthrough - every demonstration, top to bottom
//
// Writes one line per result to the given sink. Nothing is shared between
// steps; each builds its values, prints, and drops them.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

use crate::basics::{sum, Declarations};
use crate::entities::{
    show, show_drinks, Account, AlcoholicDrink, Beer, Cocktail, Combo, Snack, Wine,
};
use crate::sale::{Sale, SaleWithTaxes, Total};

/// Run the whole walkthrough against `out`
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    // Variables and types
    let decl = Declarations::declare();
    debug!(text = %decl.message, number = decl.number, is = decl.is, "declared primitives");

    // Functions with types
    let result = sum(2.0, 5.0);
    writeln!(out, "{}", result).context("Failed to write sum")?;

    // Classes and inheritance
    let sale = Sale::new(80.0);
    writeln!(out, "{}", sale.total()).context("Failed to write sale total")?;

    let sale_with_taxes = SaleWithTaxes::new(16.0, 100.0);
    writeln!(out, "{}", sale_with_taxes.total()).context("Failed to write taxed sale total")?;
    debug!("sales done");

    // Structural records
    let my_beer = Beer::new("Corona", 7.0).with_brand("Modelo");
    writeln!(out, "{}", show(&my_beer)).context("Failed to write beer info")?;

    let combo = Combo::new(Beer::new("Corona", 4.5), Snack::new("Pastel", 100.0));
    let combo_json = combo.to_json().context("Failed to serialize combo")?;
    writeln!(out, "{}", combo_json).context("Failed to write combo")?;
    debug!("records done");

    // Interfaces
    let margarita = Cocktail::new(
        "Margarita",
        12.5,
        ["tequila", "limon", "sal", "soda", "hielo"],
    );
    let rioja = Wine::new("Vino Rioja", 14.0);
    let malbec = Wine::new("Vino Malbec", 16.0);

    let drinks: [&dyn AlcoholicDrink; 3] = [&margarita, &rioja, &malbec];
    for line in show_drinks(&drinks) {
        writeln!(out, "{}", line).context("Failed to write drink info")?;
    }
    debug!(count = drinks.len(), "drinks done");

    // Accessors
    let mut account = Account::new(10.0, 1.0);
    account.set_amount(45.0);
    writeln!(out, "{}", account.total()).context("Failed to write account total")?;
    debug!("account done");

    Ok(())
}
