pub mod ui;

/// Read endpoint of the sales ledger.
pub const COLLECTION: &str = "ventas";
