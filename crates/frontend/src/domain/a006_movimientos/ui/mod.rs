use leptos::prelude::*;

use super::{TIPO_COMPRA, TIPO_VENTA};
use crate::shared::data_view::{
    Column, FilterControls, MonthControl, TabularDataView, TagControl, TextControl, TotalsSpec,
    ViewConfig,
};

/// Unified COMPRA/VENTA ledger. Rows are normalized on ingestion so the
/// per-type totals never re-coerce, and the view filters by month, type
/// and free text over product and counterparty.
#[component]
pub fn MovimientosPage() -> impl IntoView {
    let config = ViewConfig::new(
        "id_movimiento",
        vec![
            Column::text("tipo", "Tipo"),
            Column::date("fecha", "Fecha"),
            Column::text("id_producto", "ID producto"),
            Column::text("producto", "Producto"),
            Column::text("cantidad", "Cantidad"),
            Column::money("precio_unitario", "Precio unitario"),
            Column::money("total_linea", "Total línea"),
            Column::text("contraparte", "Contraparte"),
            Column::text("id_movimiento", "ID"),
        ],
    )
    .numeric(vec![
        "id_producto",
        "cantidad",
        "precio_unitario",
        "total_linea",
        "id_movimiento",
    ])
    .filters(FilterControls {
        month: Some(MonthControl { field: "fecha", default_current: true }),
        tag: Some(TagControl {
            field: "tipo",
            label: "Tipo",
            options: vec![TIPO_COMPRA, TIPO_VENTA],
        }),
        text: Some(TextControl {
            fields: vec!["producto", "contraparte"],
            placeholder: "Buscar producto o contraparte...",
        }),
    })
    .totals(
        TotalsSpec::new("total_linea", "Total movimientos")
            .by_tag("tipo")
            .with_count(),
    )
    .empty_caption("No hay movimientos para mostrar");

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Movimientos"</h1>
            </div>
            <TabularDataView
                config=config
                endpoint=Signal::derive(|| format!("/{}", super::COLLECTION))
            />
        </div>
    }
}
