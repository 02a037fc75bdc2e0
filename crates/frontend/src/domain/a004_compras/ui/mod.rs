use leptos::prelude::*;

use crate::shared::data_view::{
    Column, FilterControls, MonthControl, TabularDataView, TextControl, TotalsSpec, ViewConfig,
};

/// Purchases listing: read-only, filtered client-side by month and by
/// supplier text, with the overall and selected-month totals on top.
#[component]
pub fn ComprasPage() -> impl IntoView {
    let config = ViewConfig::new(
        "id_compra",
        vec![
            Column::text("proveedor", "Proveedor"),
            Column::date("fecha", "Fecha"),
            Column::text("producto", "Producto"),
            Column::text("cantidad", "Cantidad"),
            Column::money("precio_unitario", "Precio unitario"),
            Column::text("estado", "Estado"),
            Column::money("total", "Total"),
        ],
    )
    .numeric(vec!["cantidad", "precio_unitario", "total"])
    .filters(FilterControls {
        month: Some(MonthControl { field: "fecha", default_current: true }),
        tag: None,
        text: Some(TextControl {
            fields: vec!["proveedor"],
            placeholder: "Filtrar por proveedor...",
        }),
    })
    .totals(TotalsSpec::new("total", "Total compras").by_month("fecha"))
    .empty_caption("No hay compras registradas");

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Compras"</h1>
            </div>
            <TabularDataView
                config=config
                endpoint=Signal::derive(|| format!("/{}", super::COLLECTION))
            />
        </div>
    }
}
