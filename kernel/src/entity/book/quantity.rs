use vodca::{AsRefln, Fromln};

/// Copies on hand. Negative values are stored as given.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookQuantity(i32);

impl BookQuantity {
    pub fn new(quantity: impl Into<i32>) -> Self {
        Self(quantity.into())
    }
}
