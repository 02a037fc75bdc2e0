use contracts::domain::a003_producto as contract;
use contracts::domain::a003_producto::{ProductoDto, ProductosFiltro};
use contracts::shared::Record;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::data_view::{Column, TabularDataView, ViewConfig};
use crate::shared::toast::ToastService;

/// `<option>` list out of a categorías/proveedores collection.
fn opciones(records: &[Record]) -> impl IntoView {
    records
        .iter()
        .map(|r| {
            let id = r.text("id");
            let nombre = r.text("nombre");
            view! { <option value=id>{nombre}</option> }
        })
        .collect_view()
}

#[component]
pub fn ProductosPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let reload = RwSignal::new(0u32);
    let form = RwSignal::new(ProductoDto::default());

    let categorias = RwSignal::new(Vec::<Record>::new());
    let proveedores = RwSignal::new(Vec::<Record>::new());

    // This page filters on the server: the category select applies at once,
    // the text search only on Buscar or Enter, as the endpoint changes.
    let filtro_categoria = RwSignal::new(String::new());
    let busqueda = RwSignal::new(String::new());
    let busqueda_aplicada = RwSignal::new(String::new());

    spawn_local(async move {
        match api::fetch_categorias().await {
            Ok(rows) => {
                categorias.set(rows);
                toasts.success("Categorías cargadas exitosamente");
            }
            Err(e) => {
                log::error!("Error cargando categorías: {}", e);
                toasts.error("Error al cargar las categorías");
            }
        }
        match api::fetch_proveedores().await {
            Ok(rows) => {
                proveedores.set(rows);
                toasts.success("Proveedores cargados exitosamente");
            }
            Err(e) => {
                log::error!("Error cargando proveedores: {}", e);
                toasts.error("Error al cargar los proveedores");
            }
        }
    });

    let endpoint = Memo::new(move |_| {
        let filtro = ProductosFiltro::new(&filtro_categoria.get(), &busqueda_aplicada.get());
        api::endpoint_filtrado(&filtro)
    });

    let config = ViewConfig::new(
        contract::ID_FIELD,
        vec![
            Column::text("nombre", "Nombre"),
            Column::text("categoria", "Categoría"),
            Column::text("proveedor", "Proveedor"),
            Column::money("precio_compra", "Precio compra"),
            Column::money("precio_venta", "Precio venta"),
            Column::text("stock_minimo", "Stock mínimo"),
        ],
    )
    .numeric(vec!["precio_compra", "precio_venta", "stock_minimo"])
    .empty_caption("No hay productos registrados")
    .delete_prompt("¿Seguro que quieres eliminar este producto?");

    let on_edit = Callback::new(move |record: Record| {
        form.set(ProductoDto::from_record(&record));
    });

    let aplicar_busqueda = move || busqueda_aplicada.set(busqueda.get());

    let guardar = move |_| {
        let dto = form.get();
        if let Err(mensaje) = dto.validate() {
            toasts.warning(mensaje);
            return;
        }
        spawn_local(async move {
            match crate::shared::api::submit(contract::ENTITY, dto.id_producto, &dto).await {
                Ok(()) => {
                    toasts.success(if dto.is_edit() {
                        "Producto editado correctamente"
                    } else {
                        "Producto agregado correctamente"
                    });
                    form.set(ProductoDto::default());
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Error guardando producto: {}", e);
                    toasts.error(e.to_string());
                }
            }
        });
    };

    let cancelar = move |_| form.set(ProductoDto::default());

    let endpoint: Signal<String> = endpoint.into();

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Productos"</h1>
            </div>

            <div class="buscador">
                <select
                    prop:value=move || filtro_categoria.get()
                    on:change=move |ev| filtro_categoria.set(event_target_value(&ev))
                >
                    <option value="">"Todas las categorías"</option>
                    {move || opciones(&categorias.get())}
                </select>
                <input
                    type="text"
                    placeholder="Buscar producto..."
                    prop:value=move || busqueda.get()
                    on:input=move |ev| busqueda.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            aplicar_busqueda();
                        }
                    }
                />
                <button class="button button--secondary" on:click=move |_| aplicar_busqueda()>
                    "Buscar"
                </button>
            </div>

            <div class="form-card">
                <div class="form-row">
                    <div class="form-group">
                        <label for="prod-nombre">"Nombre"</label>
                        <input
                            type="text"
                            id="prod-nombre"
                            prop:value=move || form.get().nombre
                            on:input=move |ev| form.update(|f| f.nombre = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="prod-categoria">"Categoría"</label>
                        <select
                            id="prod-categoria"
                            prop:value=move || form.get().categoria
                            on:change=move |ev| {
                                form.update(|f| f.categoria = event_target_value(&ev))
                            }
                        >
                            <option value="">"Categoría"</option>
                            {move || opciones(&categorias.get())}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="prod-proveedor">"Proveedor"</label>
                        <select
                            id="prod-proveedor"
                            prop:value=move || form.get().proveedor
                            on:change=move |ev| {
                                form.update(|f| f.proveedor = event_target_value(&ev))
                            }
                        >
                            <option value="">"Proveedor"</option>
                            {move || opciones(&proveedores.get())}
                        </select>
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="prod-precio-compra">"Precio de compra"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="prod-precio-compra"
                            prop:value=move || form.get().precio_compra
                            on:input=move |ev| {
                                form.update(|f| f.precio_compra = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="prod-precio-venta">"Precio de venta"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="prod-precio-venta"
                            prop:value=move || form.get().precio_venta
                            on:input=move |ev| {
                                form.update(|f| f.precio_venta = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="prod-stock-minimo">"Stock mínimo"</label>
                        <input
                            type="number"
                            id="prod-stock-minimo"
                            prop:value=move || form.get().stock_minimo
                            on:input=move |ev| {
                                form.update(|f| f.stock_minimo = event_target_value(&ev))
                            }
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="prod-descripcion">"Descripción"</label>
                    <textarea
                        id="prod-descripcion"
                        rows="2"
                        prop:value=move || form.get().descripcion
                        on:input=move |ev| {
                            form.update(|f| f.descripcion = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form-actions">
                    <button class="button button--primary" on:click=guardar>
                        {move || if form.get().is_edit() { "Guardar cambios" } else { "Agregar" }}
                    </button>
                    <button class="button button--secondary" on:click=cancelar>
                        "Cancelar"
                    </button>
                </div>
            </div>

            <TabularDataView
                config=config
                endpoint=endpoint
                reload=Signal::from(reload)
                on_edit=on_edit
                delete_entity=contract::ENTITY
            />
        </div>
    }
}
