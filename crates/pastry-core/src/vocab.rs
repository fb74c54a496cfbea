//! # Vocabularies
//!
//! Suggested values for the product form's category and unit pickers.
//!
//! Both lists are suggestions only. The store accepts any non-blank value,
//! so a bakery can file a product under "Confeitaria" without a release.

/// Product categories offered by the product form, in display order.
pub const CATEGORIES: &[&str] = &[
    "Ingredientes",
    "Laticínios",
    "Frutas",
    "Nozes",
    "Temperos",
    "Padaria",
    "Bebidas",
    "Embalagens",
    "Equipamentos",
    "Outros",
];

/// Units of measure offered by the product form, in display order.
pub const UNITS: &[&str] = &[
    "kg", "g", "l", "ml", "unidade", "caixa", "pacote", "garrafa", "lata", "saco", "dúzia",
];

/// Is `category` one of the suggested categories? Exact match.
pub fn is_suggested_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

/// Is `unit` one of the suggested units? Exact match.
pub fn is_suggested_unit(unit: &str) -> bool {
    UNITS.contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        assert!(is_suggested_category("Laticínios"));
        assert!(!is_suggested_category("laticínios"));
        assert!(is_suggested_unit("dúzia"));
        assert!(!is_suggested_unit("ton"));
    }

    #[test]
    fn test_sizes() {
        assert_eq!(CATEGORIES.len(), 10);
        assert_eq!(UNITS.len(), 11);
    }
}
