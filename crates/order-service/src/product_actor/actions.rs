//! Custom actions for the Product actor.

/// Operations on a single product beyond CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
}

/// Results from [`ProductAction`]s; variants match 1:1.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    CheckStock(u32),
}
