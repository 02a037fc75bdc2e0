use contracts::domain::a001_categoria as contract;
use contracts::domain::a001_categoria::CategoriaDto;
use contracts::shared::Record;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::data_view::{Column, TabularDataView, ViewConfig};
use crate::shared::toast::ToastService;

#[component]
pub fn CategoriasPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let reload = RwSignal::new(0u32);
    let form = RwSignal::new(CategoriaDto::default());

    let config = ViewConfig::new(
        contract::ID_FIELD,
        vec![Column::text("id", "ID"), Column::text("nombre", "Nombre")],
    )
    .empty_caption("No hay categorías registradas")
    .delete_prompt("¿Seguro que quieres eliminar esta categoría?");

    let on_edit = Callback::new(move |record: Record| {
        form.set(CategoriaDto::from_record(&record));
    });

    let guardar = move |_| {
        let dto = form.get();
        if let Err(mensaje) = dto.validate() {
            toasts.warning(mensaje);
            return;
        }
        spawn_local(async move {
            match api::submit(contract::ENTITY, dto.id, &dto).await {
                Ok(()) => {
                    toasts.success(if dto.is_edit() {
                        "Categoría editada correctamente"
                    } else {
                        "Categoría agregada correctamente"
                    });
                    form.set(CategoriaDto::default());
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Error guardando categoría: {}", e);
                    toasts.error(e.to_string());
                }
            }
        });
    };

    let cancelar = move |_| form.set(CategoriaDto::default());

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Categorías"</h1>
            </div>

            <div class="form-card">
                <div class="form-group">
                    <label for="nombre-categoria">"Nombre"</label>
                    <input
                        type="text"
                        id="nombre-categoria"
                        prop:value=move || form.get().nombre
                        on:input=move |ev| form.update(|f| f.nombre = event_target_value(&ev))
                        placeholder="Nombre de la categoría"
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
                endpoint=Signal::derive(|| format!("/{}", contract::COLLECTION))
                reload=Signal::from(reload)
                on_edit=on_edit
                delete_entity=contract::ENTITY
            />
        </div>
    }
}
