use contracts::system::auth::LoginForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::toast::ToastService;

/// Login page. Checks are purely client-side (minimum lengths); the
/// session itself is the server's business.
#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let form = RwSignal::new(LoginForm::default());
    let error_message = RwSignal::new(Option::<String>::None);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match form.get().validate() {
            Ok(()) => {
                error_message.set(None);
                toasts.success("Datos válidos, entrando...");
                navigate("/", Default::default());
            }
            Err(mensaje) => {
                error_message.set(Some(mensaje.clone()));
                toasts.warning(mensaje);
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Gestión de Inventario"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="usuario">"Usuario"</label>
                        <input
                            type="text"
                            id="usuario"
                            prop:value=move || form.get().usuario
                            on:input=move |ev| {
                                form.update(|f| f.usuario = event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="contrasena">"Contraseña"</label>
                        <input
                            type="password"
                            id="contrasena"
                            prop:value=move || form.get().contrasena
                            on:input=move |ev| {
                                form.update(|f| f.contrasena = event_target_value(&ev))
                            }
                        />
                    </div>

                    <button type="submit" class="button button--primary">
                        "Entrar"
                    </button>
                </form>
            </div>
        </div>
    }
}
