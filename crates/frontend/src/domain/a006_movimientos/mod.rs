pub mod ui;

/// Read endpoint of the unified stock movements ledger.
pub const COLLECTION: &str = "movimientos";

pub const TIPO_COMPRA: &str = "COMPRA";
pub const TIPO_VENTA: &str = "VENTA";
