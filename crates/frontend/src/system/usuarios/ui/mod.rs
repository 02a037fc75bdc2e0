use contracts::shared::Record;
use contracts::system::usuarios as contract;
use contracts::system::usuarios::UsuarioDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::data_view::{Column, TabularDataView, ViewConfig};
use crate::shared::toast::ToastService;

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let reload = RwSignal::new(0u32);
    let form = RwSignal::new(UsuarioDto::default());
    // Collected by the form, checked against the password, never sent.
    let confirmacion = RwSignal::new(String::new());

    let config = ViewConfig::new(
        contract::ID_FIELD,
        vec![
            Column::text("id_usuario", "ID"),
            Column::text("nom_usuario", "Nombre"),
            Column::text("nom_rol", "Rol"),
        ],
    )
    .empty_caption("No hay usuarios registrados")
    .delete_prompt("¿Deseas eliminar este usuario?");

    let on_edit = Callback::new(move |record: Record| {
        form.set(UsuarioDto::from_record(&record));
        confirmacion.set(String::new());
    });

    let limpiar = move || {
        form.set(UsuarioDto::default());
        confirmacion.set(String::new());
    };

    let guardar = move |_| {
        let dto = form.get();
        // Validation short-circuits before any request leaves the page.
        if let Err(mensaje) = dto.validate(&confirmacion.get()) {
            toasts.warning(mensaje);
            return;
        }
        spawn_local(async move {
            match api::submit(contract::ENTITY, dto.id_usuario, &dto).await {
                Ok(()) => {
                    toasts.success(if dto.is_edit() {
                        "Usuario editado correctamente"
                    } else {
                        "Usuario agregado correctamente"
                    });
                    form.set(UsuarioDto::default());
                    confirmacion.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Error guardando usuario: {}", e);
                    toasts.error(e.to_string());
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Usuarios"</h1>
            </div>

            <div class="form-card">
                <div class="form-row">
                    <div class="form-group">
                        <label for="user-nombre">"Nombre"</label>
                        <input
                            type="text"
                            id="user-nombre"
                            prop:value=move || form.get().nombre
                            on:input=move |ev| form.update(|f| f.nombre = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="user-correo">"Correo"</label>
                        <input
                            type="email"
                            id="user-correo"
                            prop:value=move || form.get().correo
                            on:input=move |ev| form.update(|f| f.correo = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="user-contrasena">"Contraseña"</label>
                        <input
                            type="password"
                            id="user-contrasena"
                            prop:value=move || form.get().contrasena
                            on:input=move |ev| {
                                form.update(|f| f.contrasena = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="user-contrasena-rep">"Repetir contraseña"</label>
                        <input
                            type="password"
                            id="user-contrasena-rep"
                            prop:value=move || confirmacion.get()
                            on:input=move |ev| confirmacion.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-actions">
                    <button class="button button--primary" on:click=guardar>
                        {move || if form.get().is_edit() { "Guardar cambios" } else { "Agregar" }}
                    </button>
                    <button class="button button--secondary" on:click=move |_| limpiar()>
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
