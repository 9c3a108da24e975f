#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::Lesson;

/// Shopping cart state: an insertion-ordered list of lesson line items.
///
/// Invariant: at most one line item per lesson id. There is no quantity
/// concept — adding a lesson that is already in the cart is a no-op.
/// Items are verbatim clones of the catalog entry taken at add time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<Lesson>,
}

impl CartState {
    /// Add a lesson to the cart unless it is already present.
    pub fn add(&mut self, lesson: &Lesson) {
        if !self.contains(lesson.id) {
            self.items.push(lesson.clone());
        }
    }

    /// Remove the line item with the given lesson id. No-op when absent.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether a lesson is already in the cart.
    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Number of line items (not quantity-weighted; quantities don't exist).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of line item prices. No rounding, tax, or discount policy.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
