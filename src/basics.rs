// 🔤 Basics - typed declarations and a typed function
//
// Three primitive bindings (text, number, flag) and the `sum` function
// the walkthrough opens with.

// ============================================================================
// DECLARATIONS
// ============================================================================

/// One binding of each primitive kind
#[derive(Debug, Clone, PartialEq)]
pub struct Declarations {
    /// Text binding
    pub message: String,

    /// Numeric binding (all numbers are f64)
    pub number: f64,

    /// Boolean binding
    pub is: bool,
}

impl Declarations {
    /// Declare the bindings, then assign them
    pub fn declare() -> Self {
        let message: String;
        message = "pato".to_string();

        let number: f64;
        number = 1.45;

        let is: bool = true;

        Declarations { message, number, is }
    }
}

// ============================================================================
// FUNCTIONS
// ============================================================================

/// Add two numbers
pub fn sum(a: f64, b: f64) -> f64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations() {
        let decl = Declarations::declare();
        assert_eq!(decl.message, "pato");
        assert_eq!(decl.number, 1.45);
        assert!(decl.is);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(2.0, 5.0), 7.0);
        assert_eq!(sum(-2.5, 2.5), 0.0);
        assert_eq!(format!("{}", sum(2.0, 5.0)), "7");
    }
}
