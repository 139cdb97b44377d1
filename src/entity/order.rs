//! Restaurant order assembled from validated fields.

use super::record::Record;
use crate::error::ValidationResult;
use crate::value_objects::{ItemName, Quantity, UnitPrice};
use serde::Serialize;
use serde_json::Value;

/// A single-line order.
///
/// Every field is a value object, so an `Order` can only hold a real item
/// name, a quantity between 1 and 100, and a positive price of at most
/// 10 000.
///
/// # Example
/// ```rust
/// use validated_values::entity::create_order;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let order = create_order("Pizza", 3, 15.0)?;
///     assert_eq!(order.total(), 45.0);
///
///     assert!(create_order("Pizza", -3, 15.0).is_err());
///     assert!(create_order("Coffee", 50_000, 3.0).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    item_name: ItemName,
    quantity: Quantity,
    price_per_unit: UnitPrice,
}

impl Order {
    /// Assemble an order from already validated parts.
    pub fn new(item_name: ItemName, quantity: Quantity, price_per_unit: UnitPrice) -> Self {
        Self {
            item_name,
            quantity,
            price_per_unit,
        }
    }

    /// Build an order from a JSON object with `itemName`, `quantity` and
    /// `pricePerUnit` keys.
    ///
    /// Fields are validated in that order; the first failure is returned.
    pub fn from_json(value: &Value) -> ValidationResult<Self> {
        let record = Record::new("order", value)?;
        Ok(Self {
            item_name: record.field()?,
            quantity: record.field()?,
            price_per_unit: record.field()?,
        })
    }

    /// Get the item name.
    pub fn item_name(&self) -> &ItemName {
        &self.item_name
    }

    /// Get the ordered quantity.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get the price of one item.
    pub fn price_per_unit(&self) -> UnitPrice {
        self.price_per_unit
    }

    /// Quantity times unit price.
    ///
    /// Both factors are bounded, so the total is always finite.
    pub fn total(&self) -> f64 {
        f64::from(self.quantity.value()) * self.price_per_unit.value()
    }
}

/// Create an order from raw primitives.
///
/// Each argument goes through its own smart constructor, in argument order.
/// The first failing field's error is returned unchanged.
pub fn create_order(
    item_name: &str,
    quantity: i64,
    price_per_unit: f64,
) -> ValidationResult<Order> {
    Ok(Order::new(
        ItemName::new(item_name.to_string())?,
        Quantity::new(quantity)?,
        UnitPrice::new(price_per_unit)?,
    ))
}
