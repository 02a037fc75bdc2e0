use contracts::domain::a002_proveedor as contract;
use contracts::domain::a002_proveedor::ProveedorDto;
use contracts::shared::Record;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::data_view::{Column, TabularDataView, ViewConfig};
use crate::shared::toast::ToastService;

#[component]
pub fn ProveedoresPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let reload = RwSignal::new(0u32);
    let form = RwSignal::new(ProveedorDto::default());

    let config = ViewConfig::new(
        contract::ID_FIELD,
        vec![
            Column::text("id", "ID"),
            Column::text("nombre", "Nombre"),
            Column::text("telefono", "Teléfono"),
            Column::text("email", "Email"),
            Column::text("direccion", "Dirección"),
        ],
    )
    .empty_caption("No hay proveedores registrados")
    .delete_prompt("¿Seguro que quieres eliminar este proveedor?");

    let on_edit = Callback::new(move |record: Record| {
        form.set(ProveedorDto::from_record(&record));
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
                        "Proveedor editado correctamente"
                    } else {
                        "Proveedor agregado correctamente"
                    });
                    form.set(ProveedorDto::default());
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Error guardando proveedor: {}", e);
                    toasts.error(e.to_string());
                }
            }
        });
    };

    let cancelar = move |_| form.set(ProveedorDto::default());

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Proveedores"</h1>
            </div>

            <div class="form-card">
                <div class="form-row">
                    <div class="form-group">
                        <label for="prov-nombre">"Nombre"</label>
                        <input
                            type="text"
                            id="prov-nombre"
                            prop:value=move || form.get().nombre
                            on:input=move |ev| form.update(|f| f.nombre = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="prov-telefono">"Teléfono"</label>
                        <input
                            type="text"
                            id="prov-telefono"
                            prop:value=move || form.get().telefono
                            on:input=move |ev| form.update(|f| f.telefono = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="prov-email">"Email"</label>
                        <input
                            type="email"
                            id="prov-email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="prov-direccion">"Dirección"</label>
                        <input
                            type="text"
                            id="prov-direccion"
                            prop:value=move || form.get().direccion
                            on:input=move |ev| form.update(|f| f.direccion = event_target_value(&ev))
                        />
                    </div>
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
