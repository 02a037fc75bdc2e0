//! The tabular data view every list page is an instance of.
//!
//! One component owns the cache/view pair for one endpoint family: it
//! fetches the collection, normalizes rows once, applies the client-side
//! filter criteria, renders the table with per-row actions and keeps the
//! totals in sync with the filtered view. Pages differ only in the
//! [`ViewConfig`] they pass in and in their create/edit forms.

pub mod config;

pub use config::{
    Column, ColumnFormat, FilterControls, MonthControl, TagControl, TextControl, TotalsSpec,
    ViewConfig,
};

use contracts::shared::aggregate::{self, GroupKey};
use contracts::shared::{LoadPhase, Record, TableData};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::date_utils;
use crate::shared::number_format::format_money;
use crate::shared::toast::ToastService;

#[component]
pub fn TabularDataView(
    config: ViewConfig,
    /// Read endpoint. Reactive so pages with server-side filters can swap
    /// it; every change triggers a reload.
    #[prop(into)]
    endpoint: Signal<String>,
    /// External reload trigger; pages bump it after a form save.
    #[prop(optional, into)]
    reload: Option<Signal<u32>>,
    /// Renders an Editar button per row when provided.
    #[prop(optional, into)]
    on_edit: Option<Callback<Record>>,
    /// Entity segment of `eliminar_<entity>/<id>`; enables per-row delete.
    #[prop(optional, into)]
    delete_entity: Option<&'static str>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let table = RwSignal::new(TableData::new());
    // Bumped by the delete flow; load depends on it as well as on `reload`.
    let local_reload = RwSignal::new(0u32);

    let ViewConfig {
        id_field,
        columns,
        numeric_fields,
        filters,
        totals,
        empty_caption,
        delete_prompt,
    } = config;

    let month_default = filters.month.map(|m| m.default_current).unwrap_or(false);
    let initial_month = move || {
        if month_default {
            date_utils::current_month()
        } else {
            String::new()
        }
    };

    // Filter control state. Criteria changes are synchronous and touch no
    // network; the view is recomputed straight from the cache.
    let month = RwSignal::new(initial_month());
    let tag = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());

    {
        let filters = filters.clone();
        Effect::new(move |_| {
            let criteria = filters.criteria(&month.get(), &tag.get(), &query.get());
            table.update(|t| t.set_criteria(criteria));
        });
    }

    // Load cycle. Each run takes a generation token; only the latest
    // issued request may replace the cache, so a slow response from a
    // superseded reload is discarded instead of overwriting newer data.
    {
        let numeric_fields = numeric_fields.clone();
        Effect::new(move |_| {
            let url = endpoint.get();
            if let Some(reload) = reload {
                reload.track();
            }
            local_reload.track();

            let generation = table
                .try_update(|t| t.begin_load())
                .unwrap_or_default();
            let numeric_fields = numeric_fields.clone();
            spawn_local(async move {
                let result = api::fetch_records(&url)
                    .await
                    .map(|rows| {
                        rows.into_iter()
                            .map(|r| r.normalize(&numeric_fields))
                            .collect::<Vec<_>>()
                    })
                    .map_err(|e| e.to_string());
                let failure = result.as_ref().err().cloned();
                let applied = table
                    .try_update(|t| t.ingest(generation, result))
                    .unwrap_or(false);
                if applied {
                    if let Some(message) = failure {
                        log::error!("Error cargando {}: {}", url, message);
                        toasts.error(format!("Error cargando datos: {}", message));
                    }
                }
            });
        });
    }

    let delete_record = Callback::new(move |id: i64| {
        let Some(entity) = delete_entity else {
            return;
        };
        let on_accept = Callback::new(move |_| {
            spawn_local(async move {
                match api::remove(entity, id).await {
                    Ok(()) => {
                        toasts.success("Registro eliminado");
                        local_reload.update(|n| *n += 1);
                    }
                    Err(e) => {
                        log::error!("Error al eliminar {} {}: {}", entity, id, e);
                        toasts.error(e.to_string());
                    }
                }
            });
        });
        let on_cancel = Callback::new(move |_| toasts.info("Eliminación cancelada"));
        toasts.confirm(delete_prompt, on_accept, on_cancel);
    });

    let has_actions = on_edit.is_some() || delete_entity.is_some();
    let colspan = (columns.len() + usize::from(has_actions)).to_string();

    let filter_bar = (!filters.is_empty()).then(|| {
        let tag_ctl = filters.tag.clone();
        let text_ctl = filters.text.clone();
        let has_month = filters.month.is_some();
        view! {
            <div class="filter-bar">
                {has_month
                    .then(|| {
                        view! {
                            <input
                                type="month"
                                class="filter-bar__mes"
                                prop:value=move || month.get()
                                on:change=move |ev| month.set(event_target_value(&ev))
                            />
                        }
                    })}
                {tag_ctl
                    .map(|c| {
                        view! {
                            <select
                                class="filter-bar__tipo"
                                prop:value=move || tag.get()
                                on:change=move |ev| tag.set(event_target_value(&ev))
                            >
                                <option value="">{format!("{}: todos", c.label)}</option>
                                {c.options
                                    .iter()
                                    .map(|o| {
                                        let o = *o;
                                        view! { <option value=o>{o}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        }
                    })}
                {text_ctl
                    .map(|c| {
                        view! {
                            <input
                                type="text"
                                class="filter-bar__buscar"
                                placeholder=c.placeholder
                                prop:value=move || query.get()
                                on:input=move |ev| query.set(event_target_value(&ev))
                            />
                        }
                    })}
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        month.set(initial_month());
                        tag.set(String::new());
                        query.set(String::new());
                    }
                >
                    "Limpiar filtros"
                </button>
            </div>
        }
    });

    let totals_view = totals.map(|spec| {
        let value_field = spec.value_field;
        let overall = move || {
            let t = table.get();
            let v = t.view();
            format_money(Some(aggregate::total(&v, value_field)))
        };
        let month_total = spec.by_month_field.map(|field| {
            move || {
                let selected = month.get();
                if selected.is_empty() {
                    return format_money(None);
                }
                let t = table.get();
                let v = t.view();
                let by_month = aggregate::aggregate(&v, &GroupKey::Month(field.to_string()), value_field);
                format_money(by_month.get(&selected).copied())
            }
        });
        let tag_totals = spec.by_tag_field.map(|field| {
            move || {
                let t = table.get();
                let v = t.view();
                aggregate::aggregate(&v, &GroupKey::Field(field.to_string()), value_field)
                    .into_iter()
                    .map(|(group, sum)| {
                        let label = if group.is_empty() { "(sin valor)".to_string() } else { group };
                        view! {
                            <span class="totals__item">
                                {format!("{}: {}", label, format_money(Some(sum)))}
                            </span>
                        }
                    })
                    .collect_view()
            }
        });
        view! {
            <div class="totals">
                <span class="totals__item totals__item--general">{spec.label}": "{overall}</span>
                {month_total
                    .map(|f| view! { <span class="totals__item">"Mes seleccionado: "{f}</span> })}
                {tag_totals.map(|f| view! { <span class="totals__grupo">{f}</span> })}
                {spec
                    .show_count
                    .then(|| {
                        view! {
                            <span class="totals__item">
                                "Registros: " {move || table.with(|t| t.view().len())}
                            </span>
                        }
                    })}
            </div>
        }
    });

    let header_cells = columns
        .iter()
        .map(|c| view! { <th class="table__header-cell">{c.title}</th> })
        .collect_view();

    let body = {
        let columns = columns.clone();
        let colspan = colspan.clone();
        move || {
            let t = table.get();
            match t.phase() {
                LoadPhase::Errored(_) => view! {
                    <tr>
                        <td colspan=colspan.clone() class="table__status table__status--error">
                            "Error cargando datos. Revisa la consola."
                        </td>
                    </tr>
                }
                .into_any(),
                LoadPhase::Idle | LoadPhase::Loading if t.cache().is_empty() => view! {
                    <tr>
                        <td colspan=colspan.clone() class="table__status">"Cargando..."</td>
                    </tr>
                }
                .into_any(),
                _ => {
                    let rows: Vec<Record> = t.view().into_iter().cloned().collect();
                    if rows.is_empty() {
                        view! {
                            <tr>
                                <td colspan=colspan.clone() class="table__status">{empty_caption}</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        rows.into_iter()
                            .map(|record| {
                                let id = record.id(id_field);
                                let cells = columns
                                    .iter()
                                    .map(|col| {
                                        let content = cell_view(col.format, col.field, &record);
                                        view! { <td class="table__cell">{content}</td> }
                                    })
                                    .collect_view();
                                let actions = has_actions.then(|| {
                                    let record_for_edit = record.clone();
                                    view! {
                                        <td class="table__cell table__cell--actions">
                                            {on_edit
                                                .map(|cb| {
                                                    view! {
                                                        <button
                                                            class="btn-editar"
                                                            on:click=move |_| cb.run(record_for_edit.clone())
                                                        >
                                                            "Editar"
                                                        </button>
                                                    }
                                                })}
                                            {delete_entity
                                                .and(id)
                                                .map(|id| {
                                                    view! {
                                                        <button
                                                            class="btn-eliminar"
                                                            on:click=move |_| delete_record.run(id)
                                                        >
                                                            "Eliminar"
                                                        </button>
                                                    }
                                                })}
                                        </td>
                                    }
                                });
                                view! { <tr class="table__row">{cells}{actions}</tr> }
                            })
                            .collect_view()
                            .into_any()
                    }
                }
            }
        }
    };

    view! {
        <div class="data-view">
            {filter_bar}
            {totals_view}
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header_cells}
                            {has_actions
                                .then(|| view! { <th class="table__header-cell">"Acciones"</th> })}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </div>
    }
}

/// Pure mapping from one record field to its cell content.
fn cell_view(format: ColumnFormat, field: &str, record: &Record) -> AnyView {
    match format {
        ColumnFormat::Text => record.text(field).into_any(),
        ColumnFormat::Money => format_money(record.number(field)).into_any(),
        ColumnFormat::Date => date_utils::format_date(&record.text(field)).into_any(),
        ColumnFormat::Badge(badge) => {
            let text = record.text(field);
            let badge = badge(record);
            view! {
                <>
                    {text}
                    {badge
                        .map(|(label, class)| {
                            view! { <span class=format!("badge {}", class)>{label}</span> }
                        })}
                </>
            }
            .into_any()
        }
    }
}
