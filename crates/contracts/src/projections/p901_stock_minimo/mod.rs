/// Read endpoint of the low-stock report.
pub const COLLECTION: &str = "stock_minimo";
pub const ID_FIELD: &str = "id_producto";

/// Severity badge shown next to a low stock figure.
///
/// Thresholds follow the report's observed behavior: zero is sold out,
/// below ten is critical, twenty to thirty is near-critical, and the band
/// in between carries no badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockSeverity {
    Agotado,
    Critico,
    CasiCritico,
}

impl StockSeverity {
    pub fn for_stock(stock: i64) -> Option<Self> {
        match stock {
            0 => Some(Self::Agotado),
            s if s < 10 => Some(Self::Critico),
            20..=30 => Some(Self::CasiCritico),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Agotado => "Agotado",
            Self::Critico => "Stock crítico",
            Self::CasiCritico => "Stock casi crítico",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Agotado => "badge-gray",
            Self::Critico => "badge-red",
            Self::CasiCritico => "badge-amber",
        }
    }
}
