//! Category filters for the stock check view

use std::fmt;
use std::str::FromStr;

use super::product::Product;

/// A category filter keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFilter {
    /// Products whose category is "food"
    Food,
    /// Products whose category is "non-food"
    NonFood,
    /// Every product
    All,
}

impl ProductFilter {
    /// Check whether a product passes this filter
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::Food => product.category.eq_ignore_ascii_case("food"),
            ProductFilter::NonFood => product.category.eq_ignore_ascii_case("non-food"),
            ProductFilter::All => true,
        }
    }

    /// The keyword for this filter
    pub fn keyword(&self) -> &'static str {
        match self {
            ProductFilter::Food => "food",
            ProductFilter::NonFood => "non-food",
            ProductFilter::All => "all",
        }
    }
}

impl fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ProductFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(ProductFilter::Food),
            "non-food" => Ok(ProductFilter::NonFood),
            "all" => Ok(ProductFilter::All),
            other => Err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("FOOD".parse::<ProductFilter>(), Ok(ProductFilter::Food));
        assert_eq!("Non-Food".parse::<ProductFilter>(), Ok(ProductFilter::NonFood));
        assert_eq!(" all ".parse::<ProductFilter>(), Ok(ProductFilter::All));
    }

    #[test]
    fn test_parse_invalid_keyword() {
        assert_eq!("xyz".parse::<ProductFilter>(), Err("xyz".to_string()));
        assert!("".parse::<ProductFilter>().is_err());
    }

    #[test]
    fn test_matches_category_ignoring_case() {
        let food = Product::new("Pears", true, "food", 1);
        let food_upper = Product::new("Rice", true, "Food", 1);
        let non_food = Product::new("Soap", true, "non-food", 1);
        let other = Product::new("Gift card", true, "voucher", 1);

        assert!(ProductFilter::Food.matches(&food));
        assert!(ProductFilter::Food.matches(&food_upper));
        assert!(!ProductFilter::Food.matches(&non_food));
        assert!(ProductFilter::NonFood.matches(&non_food));
        assert!(!ProductFilter::NonFood.matches(&other));
        assert!(ProductFilter::All.matches(&other));
    }
}
