use contracts::projections::p901_stock_minimo as contract;
use contracts::projections::p901_stock_minimo::StockSeverity;
use contracts::shared::Record;
use leptos::prelude::*;

use crate::shared::data_view::{Column, TabularDataView, ViewConfig};

fn stock_badge(record: &Record) -> Option<(&'static str, &'static str)> {
    let stock = record.number("stock_minimo")? as i64;
    StockSeverity::for_stock(stock).map(|s| (s.label(), s.css_class()))
}

/// Low-stock alert report: read-only listing with a severity badge next
/// to the stock figure.
#[component]
pub fn StockMinimoPage() -> impl IntoView {
    let config = ViewConfig::new(
        contract::ID_FIELD,
        vec![
            Column::text("id_producto", "ID"),
            Column::text("nombre", "Nombre"),
            Column::text("descripcion", "Descripción"),
            Column::badge("stock_minimo", "Stock", stock_badge),
        ],
    )
    .numeric(vec!["id_producto", "stock_minimo"])
    .empty_caption("No hay productos con stock bajo");

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Stock mínimo"</h1>
            </div>
            <TabularDataView
                config=config
                endpoint=Signal::derive(|| format!("/{}", contract::COLLECTION))
            />
        </div>
    }
}
