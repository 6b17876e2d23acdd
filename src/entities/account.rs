// 💳 Account Entity - guarded amount + computed total
//
// Problem solved:
// - Amount can only change through `set_amount`, which never stores a negative
// - `total` is derived on every read, so it always reflects the current amount

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account with an amount and a fixed commission
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Current amount (never negative once set through `set_amount`)
    amount: f64,

    /// Commission added on top of the amount
    commission: f64,
}

impl Account {
    /// Create new account; the opening amount is taken as given
    pub fn new(amount: f64, commission: f64) -> Self {
        Account { amount, commission }
    }

    /// Update amount, negative values become 0
    pub fn set_amount(&mut self, amount: f64) {
        let amount = if amount < 0.0 { 0.0 } else { amount };
        self.amount = amount;
    }

    /// Amount plus commission, computed at read time
    pub fn total(&self) -> f64 {
        self.amount + self.commission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_total_without_mutation() {
        let account = Account::new(10.0, 1.0);
        assert_eq!(account.total(), 11.0);
    }

    #[test]
    fn test_account_set_amount() {
        let mut account = Account::new(10.0, 1.0);
        account.set_amount(45.0);
        assert_eq!(account.total(), 46.0);
    }

    #[test]
    fn test_account_negative_amount_clamped() {
        let cases = [
            (10.0, 1.0, -5.0),
            (0.0, 2.5, -0.01),
            (-3.0, 7.0, -100.0),
        ];

        for (amount, commission, value) in cases {
            let mut account = Account::new(amount, commission);
            account.set_amount(value);
            assert_eq!(account.total(), commission);
        }
    }

    #[test]
    fn test_account_total_not_cached() {
        let mut account = Account::new(10.0, 1.0);
        assert_eq!(account.total(), 11.0);

        account.set_amount(20.0);
        assert_eq!(account.total(), 21.0);

        account.set_amount(-1.0);
        assert_eq!(account.total(), 1.0);
    }

    #[test]
    fn test_negative_opening_amount_kept() {
        let account = Account::new(-10.0, 1.0);
        assert_eq!(account.total(), -9.0);
    }
}
