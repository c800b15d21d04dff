//! Validation utilities for the Warehouse Management System

use rust_decimal::Decimal;

/// Validate SKU format (2-32 uppercase alphanumeric, dashes allowed)
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.len() < 2 {
        return Err("SKU must be at least 2 characters");
    }
    if sku.len() > 32 {
        return Err("SKU must be at most 32 characters");
    }
    if !sku
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("SKU must be uppercase alphanumeric (dashes allowed)");
    }
    Ok(())
}

/// Validate an order number (non-empty, at most 64 characters)
pub fn validate_order_number(order_number: &str) -> Result<(), &'static str> {
    if order_number.trim().is_empty() {
        return Err("Order number must not be empty");
    }
    if order_number.len() > 64 {
        return Err("Order number must be at most 64 characters");
    }
    Ok(())
}

/// Validate a movement quantity (strictly positive)
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate an order's line-item quantities: the list must be non-empty and
/// every quantity strictly positive
pub fn validate_order_items(quantities: &[Decimal]) -> Result<(), &'static str> {
    if quantities.is_empty() {
        return Err("Order must contain at least one item");
    }
    for q in quantities {
        validate_quantity(*q)?;
    }
    Ok(())
}

/// Validate that a display name is present
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    Ok(())
}

/// Validate a unit price (non-negative)
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_valid_sku() {
        assert!(validate_sku("WID-001").is_ok());
        assert!(validate_sku("A1").is_ok());
    }

    #[test]
    fn test_invalid_sku() {
        assert!(validate_sku("x").is_err());
        assert!(validate_sku("lowercase").is_err());
        assert!(validate_sku("HAS SPACE").is_err());
        assert!(validate_sku(&"X".repeat(33)).is_err());
    }

    #[test]
    fn test_order_number() {
        assert!(validate_order_number("ORD-2025-0001").is_ok());
        assert!(validate_order_number("   ").is_err());
        assert!(validate_order_number(&"9".repeat(65)).is_err());
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(validate_quantity(dec("0.5")).is_ok());
        assert!(validate_quantity(Decimal::ZERO).is_err());
        assert!(validate_quantity(dec("-3")).is_err());
    }

    #[test]
    fn test_order_items_rejects_empty_list() {
        assert!(validate_order_items(&[]).is_err());
    }

    #[test]
    fn test_order_items_rejects_bad_quantity() {
        assert!(validate_order_items(&[dec("1"), Decimal::ZERO]).is_err());
        assert!(validate_order_items(&[dec("1"), dec("2.5")]).is_ok());
    }

    #[test]
    fn test_price_non_negative() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(dec("-0.01")).is_err());
    }
}
