//! # Validation Module
//!
//! Field rules for everything a form can submit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end form                                               │
//! │  ├── Required markers, input types                                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store boundary (Rust)                                        │
//! │  ├── Type validation (deserialization, unsigned stock)                 │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory Store                                              │
//! │  └── Referential rules (supplier still referenced → refuse delete)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pastry_core::validation::{validate_email, validate_price_cents};
//!
//! assert!(validate_email("email", "joao@moinhopaulista.com").is_ok());
//! assert!(validate_price_cents(2599).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::{ProductFields, SupplierFields};
use crate::{MAX_PRICE_CENTS, MAX_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field.
///
/// ## Rules
/// - Must not be blank (whitespace only counts as blank)
/// - At most [`MAX_TEXT_LEN`] characters
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Required
/// - Shaped `local@domain.tld`: no whitespace anywhere, something before the
///   `@`, and a dot after it with text on both sides
///
/// ## Example
/// ```rust
/// use pastry_core::validation::validate_email;
///
/// assert!(validate_email("email", "maria@acucarecia.com").is_ok());
/// assert!(validate_email("email", "maria@acucarecia").is_err());
/// assert!(validate_email("email", "maria @acucarecia.com").is_err());
/// ```
pub fn validate_email(field: &str, email: &str) -> ValidationResult<()> {
    validate_required(field, email)?;

    if !is_email_shaped(email) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must look like name@domain.tld".to_string(),
        });
    }

    Ok(())
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    // Any '@' may be the separator; the domain part needs an inner dot.
    email.match_indices('@').any(|(at, _)| {
        let domain = &email[at + 1..];
        at > 0
            && domain
                .match_indices('.')
                .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (donated / sample items)
/// - At most [`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use pastry_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1850).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(i64::MAX / 2).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the supplier form.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Suppliers: "Novo Fornecedor"                                          │
/// │                                                                         │
/// │  User fills name, contact, phone, email, address                       │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_supplier_fields(..) ← THIS FUNCTION                          │
/// │       │                                                                 │
/// │       ├── blank field?   → Error: "<field> is required"                │
/// │       ├── bad email?     → Error: "email has invalid format"           │
/// │       │                                                                 │
/// │       └── OK → add_supplier / update_supplier                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_supplier_fields(fields: &SupplierFields) -> ValidationResult<()> {
    validate_required("name", &fields.name)?;
    validate_required("contactName", &fields.contact_name)?;
    validate_required("phone", &fields.phone)?;
    validate_email("email", &fields.email)?;
    validate_required("address", &fields.address)?;
    Ok(())
}

/// Validates the product form.
///
/// Stock and minimum stock are unsigned, so only the price needs a range
/// check. Description and image are optional.
pub fn validate_product_fields(fields: &ProductFields) -> ValidationResult<()> {
    validate_required("name", &fields.name)?;
    validate_required("supplierId", &fields.supplier_id)?;
    validate_price_cents(fields.price_cents)?;
    validate_required("unit", &fields.unit)?;
    validate_required("category", &fields.category)?;

    if fields.description.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates the registration form.
pub fn validate_registration(name: &str, email: &str, secret: &str) -> ValidationResult<()> {
    validate_required("name", name)?;
    validate_email("email", email)?;
    if secret.is_empty() {
        return Err(ValidationError::required("password"));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier_fields() -> SupplierFields {
        SupplierFields {
            name: "Moinho Paulista".to_string(),
            contact_name: "João Silva".to_string(),
            phone: "(11) 98765-4321".to_string(),
            email: "joao@moinhopaulista.com".to_string(),
            address: "Rua das Farinhas, 123 - São Paulo".to_string(),
        }
    }

    fn product_fields() -> ProductFields {
        ProductFields {
            name: "Manteiga".to_string(),
            description: "Manteiga sem sal para massa".to_string(),
            supplier_id: "2".to_string(),
            price_cents: 3275,
            stock_quantity: 28,
            unit: "kg".to_string(),
            category: "Laticínios".to_string(),
            minimum_stock: 10,
            image: None,
        }
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Manteiga").is_ok());
        assert_eq!(
            validate_required("name", "   "),
            Err(ValidationError::required("name"))
        );
        assert!(validate_required("name", &"A".repeat(MAX_TEXT_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "a@b.co").is_ok());
        assert!(validate_email("email", "first.last@sub.domain.com").is_ok());

        assert!(validate_email("email", "").is_err());
        assert!(validate_email("email", "no-at-sign.com").is_err());
        assert!(validate_email("email", "@domain.com").is_err());
        assert!(validate_email("email", "user@domain").is_err());
        assert!(validate_email("email", "user@.com").is_err());
        assert!(validate_email("email", "user@domain.").is_err());
        assert!(validate_email("email", "us er@domain.com").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(2599).is_ok());
        assert!(validate_price_cents(-1).is_err());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert_eq!(
            validate_price_cents(MAX_PRICE_CENTS + 1),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE_CENTS,
            })
        );
    }

    #[test]
    fn test_validate_supplier_fields() {
        assert!(validate_supplier_fields(&supplier_fields()).is_ok());

        let mut fields = supplier_fields();
        fields.phone = String::new();
        let err = validate_supplier_fields(&fields).unwrap_err();
        assert_eq!(err.field(), "phone");

        let mut fields = supplier_fields();
        fields.email = "joao.moinho".to_string();
        assert!(matches!(
            validate_supplier_fields(&fields),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_product_fields() {
        assert!(validate_product_fields(&product_fields()).is_ok());

        let mut fields = product_fields();
        fields.description = String::new();
        assert!(validate_product_fields(&fields).is_ok());

        let mut fields = product_fields();
        fields.supplier_id = String::new();
        assert_eq!(
            validate_product_fields(&fields).unwrap_err().field(),
            "supplierId"
        );

        let mut fields = product_fields();
        fields.price_cents = -50;
        assert!(validate_product_fields(&fields).is_err());
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration("Ana", "ana@x.com", "secret").is_ok());
        assert!(validate_registration("", "ana@x.com", "secret").is_err());
        assert!(validate_registration("Ana", "ana", "secret").is_err());
        assert_eq!(
            validate_registration("Ana", "ana@x.com", ""),
            Err(ValidationError::required("password"))
        );
    }
}
