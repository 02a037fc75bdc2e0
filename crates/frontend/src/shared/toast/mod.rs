//! Toast notifications and the confirmation toast used by delete flows.
//!
//! One [`ToastService`] is provided via context at the app root; pages push
//! messages through it instead of touching the DOM.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    mensaje: String,
}

/// A pending confirmation. Only one can be open at a time; a new request
/// replaces the previous one.
#[derive(Clone)]
pub struct ConfirmRequest {
    pub mensaje: String,
    pub on_accept: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    confirm: RwSignal<Option<ConfirmRequest>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            confirm: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, kind: ToastKind, mensaje: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast { id, kind, mensaje: mensaje.into() });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, mensaje: impl Into<String>) {
        self.push(ToastKind::Success, mensaje);
    }

    pub fn error(&self, mensaje: impl Into<String>) {
        self.push(ToastKind::Error, mensaje);
    }

    pub fn warning(&self, mensaje: impl Into<String>) {
        self.push(ToastKind::Warning, mensaje);
    }

    pub fn info(&self, mensaje: impl Into<String>) {
        self.push(ToastKind::Info, mensaje);
    }

    /// Ask the user before a destructive action. The accepted/cancelled
    /// callback runs after the confirmation closes.
    pub fn confirm(
        &self,
        mensaje: impl Into<String>,
        on_accept: Callback<()>,
        on_cancel: Callback<()>,
    ) {
        self.confirm.set(Some(ConfirmRequest {
            mensaje: mensaje.into(),
            on_accept,
            on_cancel,
        }));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-position host rendering the toast stack and the confirmation
/// toast. Mounted once, next to the router.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not found in context");
    let toasts = service.toasts;
    let confirm = service.confirm;

    view! {
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|t| {
                        view! {
                            <div class=format!("toast {} show", t.kind.css_class())>
                                <span>{t.mensaje}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            {move || {
                confirm.get().map(|req| {
                    let accept = req.on_accept;
                    let cancel = req.on_cancel;
                    view! {
                        <div class="confirm-toast show">
                            <span>{req.mensaje.clone()}</span>
                            <div class="buttons">
                                <button
                                    class="accept"
                                    on:click=move |_| {
                                        confirm.set(None);
                                        accept.run(());
                                    }
                                >
                                    "Aceptar"
                                </button>
                                <button
                                    class="cancel"
                                    on:click=move |_| {
                                        confirm.set(None);
                                        cancel.run(());
                                    }
                                >
                                    "Cancelar"
                                </button>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
