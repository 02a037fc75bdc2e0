use leptos::prelude::*;

use crate::shared::data_view::{
    Column, FilterControls, MonthControl, TabularDataView, TotalsSpec, ViewConfig,
};

/// Sales listing: read-only, month filter plus overall and per-month
/// totals of the sale amount.
#[component]
pub fn VentasPage() -> impl IntoView {
    let config = ViewConfig::new(
        "id_venta",
        vec![
            Column::text("id_venta", "ID"),
            Column::date("fecha", "Fecha"),
            Column::text("usuario", "Usuario"),
            Column::text("producto", "Producto"),
            Column::text("cantidad", "Cantidad"),
            Column::money("precio_unitario", "Precio unitario"),
            Column::money("subtotal", "Subtotal"),
            Column::money("total_venta", "Total"),
            Column::text("metodo_pago", "Método de pago"),
        ],
    )
    .numeric(vec!["cantidad", "precio_unitario", "subtotal", "total_venta"])
    .filters(FilterControls {
        month: Some(MonthControl { field: "fecha", default_current: true }),
        tag: None,
        text: None,
    })
    .totals(TotalsSpec::new("total_venta", "Total ventas").by_month("fecha"))
    .empty_caption("No hay ventas registradas");

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Ventas"</h1>
            </div>
            <TabularDataView
                config=config
                endpoint=Signal::derive(|| format!("/{}", super::COLLECTION))
            />
        </div>
    }
}
