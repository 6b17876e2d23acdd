// 🍺 Beer, Snack and the Beer + Snack combo
//
// Plain records. `Combo` carries every field of both shapes at once and
// can be viewed as either one; there is no hierarchy between them.

use serde::{Deserialize, Serialize, Serializer};

/// Largest f64 that still holds every integer exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Whole numbers go out as integers (`100`, not `100.0`)
fn shortest_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

// ============================================================================
// BEER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    /// Fixed at construction, no setter
    name: String,

    /// Alcohol by volume
    #[serde(serialize_with = "shortest_number")]
    pub alcohol: f64,

    /// Brand (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Beer {
    pub fn new(name: impl Into<String>, alcohol: f64) -> Self {
        Beer {
            name: name.into(),
            alcohol,
            brand: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AsRef<Beer> for Beer {
    fn as_ref(&self) -> &Beer {
        self
    }
}

/// Info line for anything that has the Beer shape
pub fn show(beer: impl AsRef<Beer>) -> String {
    let beer = beer.as_ref();
    format!("info: {} {}", beer.name(), beer.alcohol)
}

// ============================================================================
// SNACK
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snack {
    pub name_snack: String,

    #[serde(serialize_with = "shortest_number")]
    pub price: f64,
}

impl Snack {
    pub fn new(name_snack: impl Into<String>, price: f64) -> Self {
        Snack {
            name_snack: name_snack.into(),
            price,
        }
    }
}

impl AsRef<Snack> for Snack {
    fn as_ref(&self) -> &Snack {
        self
    }
}

// ============================================================================
// COMBO (Beer & Snack)
// ============================================================================

/// A value with every Beer field and every Snack field.
///
/// Serializes as one flat object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    #[serde(flatten)]
    beer: Beer,

    #[serde(flatten)]
    snack: Snack,
}

impl Combo {
    pub fn new(beer: Beer, snack: Snack) -> Self {
        Combo { beer, snack }
    }

    pub fn name(&self) -> &str {
        self.beer.name()
    }

    pub fn alcohol(&self) -> f64 {
        self.beer.alcohol
    }

    pub fn brand(&self) -> Option<&str> {
        self.beer.brand.as_deref()
    }

    pub fn name_snack(&self) -> &str {
        &self.snack.name_snack
    }

    pub fn price(&self) -> f64 {
        self.snack.price
    }

    /// Flat JSON rendering, as printed by the walkthrough
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl AsRef<Beer> for Combo {
    fn as_ref(&self) -> &Beer {
        &self.beer
    }
}

impl AsRef<Snack> for Combo {
    fn as_ref(&self) -> &Snack {
        &self.snack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_combo() -> Combo {
        Combo::new(Beer::new("Corona", 4.5), Snack::new("Pastel", 100.0))
    }

    #[test]
    fn test_show_beer() {
        let beer = Beer::new("Corona", 7.0).with_brand("Modelo");
        assert_eq!(show(&beer), "info: Corona 7");
        assert_eq!(beer.brand.as_deref(), Some("Modelo"));
    }

    #[test]
    fn test_beer_brand_optional() {
        let beer = Beer::new("Corona", 7.0);
        assert!(beer.brand.is_none());

        let json = serde_json::to_value(&beer).unwrap();
        assert!(json.get("brand").is_none());
    }

    #[test]
    fn test_combo_has_both_shapes() {
        let combo = create_test_combo();

        assert_eq!(combo.name(), "Corona");
        assert_eq!(combo.alcohol(), 4.5);
        assert_eq!(combo.brand(), None);
        assert_eq!(combo.name_snack(), "Pastel");
        assert_eq!(combo.price(), 100.0);

        let snack: &Snack = combo.as_ref();
        assert_eq!(snack.name_snack, "Pastel");
        assert_eq!(show(&combo), "info: Corona 4.5");
    }

    #[test]
    fn test_combo_serializes_flat() {
        let combo = create_test_combo();
        let json = serde_json::to_value(&combo).unwrap();

        assert_eq!(json["name"], "Corona");
        assert_eq!(json["alcohol"], 4.5);
        assert_eq!(json["nameSnack"], "Pastel");
        assert_eq!(json["price"], 100);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_combo_whole_numbers_without_fraction() {
        let combo = create_test_combo();
        let json = combo.to_json().unwrap();

        assert_eq!(json, r#"{"name":"Corona","alcohol":4.5,"nameSnack":"Pastel","price":100}"#);
        assert!(!json.contains("100.0"));

        let beer = serde_json::to_string(&Beer::new("Corona", 7.0)).unwrap();
        assert_eq!(beer, r#"{"name":"Corona","alcohol":7}"#);
    }

    #[test]
    fn test_combo_fractional_price_kept() {
        let combo = Combo::new(Beer::new("Corona", 4.5), Snack::new("Pastel", 99.5));
        assert!(combo.to_json().unwrap().ends_with(r#""price":99.5}"#));
    }

    #[test]
    fn test_combo_from_flat_json() {
        let json = r#"{"name":"Corona","alcohol":4.5,"nameSnack":"Pastel","price":100.0}"#;
        let combo: Combo = serde_json::from_str(json).unwrap();
        assert_eq!(combo, create_test_combo());
    }
}
