// 🧾 Sales - base sale and a taxed sale built on top of it
//
// `SaleWithTaxes` embeds a `Sale` and adds its tax to the base total.
// The base total is always read from the embedded sale, so the override
// never calls back into itself.

// ============================================================================
// TOTAL
// ============================================================================

/// Anything that can report a total amount
pub trait Total {
    fn total(&self) -> f64;
}

// ============================================================================
// SALE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    /// Sale amount; readable through `total`, never written from outside
    amount: f64,
}

impl Sale {
    pub fn new(amount: f64) -> Self {
        Sale { amount }
    }
}

impl Total for Sale {
    fn total(&self) -> f64 {
        self.amount
    }
}

// ============================================================================
// SALE WITH TAXES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SaleWithTaxes {
    base: Sale,
    tax: f64,
}

impl SaleWithTaxes {
    /// Tax first, then amount
    pub fn new(tax: f64, amount: f64) -> Self {
        SaleWithTaxes {
            base: Sale::new(amount),
            tax,
        }
    }

    /// The base sale this one extends
    pub fn base(&self) -> &Sale {
        &self.base
    }
}

impl Total for SaleWithTaxes {
    fn total(&self) -> f64 {
        self.tax + self.base.total()
    }
}
