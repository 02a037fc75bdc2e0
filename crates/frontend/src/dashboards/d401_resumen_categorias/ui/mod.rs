use contracts::dashboards::d401_resumen_categorias::ResumenCategorias;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::number_format::format_entero;
use crate::shared::toast::ToastService;

/// Products-per-category summary: stat cards plus a totals table. The
/// same payload the charting page consumed, rendered without a chart
/// library.
#[component]
pub fn ResumenCategoriasPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let resumen = RwSignal::new(ResumenCategorias::default());
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_resumen().await {
            Ok(data) => {
                resumen.set(data);
                error.set(None);
            }
            Err(e) => {
                log::error!("Error cargando resumen de categorías: {}", e);
                error.set(Some(e.to_string()));
                toasts.error("Error al cargar el resumen");
            }
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Resumen por categoría"</h1>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="warning-box">{e}</div> })
            }}

            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-card__label">"Total de productos"</span>
                    <span class="stat-card__value">
                        {move || format_entero(resumen.get().total())}
                    </span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Categorías"</span>
                    <span class="stat-card__value">
                        {move || resumen.get().labels.len()}
                    </span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Categoría con más productos"</span>
                    <span class="stat-card__value">
                        {move || {
                            resumen
                                .with(|r| r.mayor().map(|(label, _)| label.to_string()))
                                .unwrap_or_else(|| "Sin datos".to_string())
                        }}
                    </span>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Categoría"</th>
                            <th class="table__header-cell">"Productos"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let r = resumen.get();
                            let filas: Vec<(String, f64)> = r
                                .filas()
                                .into_iter()
                                .map(|(l, v)| (l.to_string(), v))
                                .collect();
                            if filas.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="2" class="table__status">
                                            "No hay categorías registradas"
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                filas
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{label}</td>
                                                <td class="table__cell">{format_entero(value)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
