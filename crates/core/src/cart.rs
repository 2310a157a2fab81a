//! Cart total aggregation.
//!
//! The one computed value in the client: nothing here is cached or
//! persisted, callers recompute from the current item collection on every
//! render.

use crate::models::CartItem;
use crate::types::Price;

/// Sum of `price * quantity` over all items. An empty cart totals zero.
#[must_use]
pub fn cart_total(items: &[CartItem]) -> Price {
    items.iter().map(CartItem::line_total).sum()
}
