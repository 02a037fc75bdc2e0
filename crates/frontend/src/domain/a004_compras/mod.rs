pub mod ui;

/// Read endpoint of the purchases ledger.
pub const COLLECTION: &str = "compras";
