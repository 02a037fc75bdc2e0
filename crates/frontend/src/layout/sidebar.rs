use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Gestión de Inventario"</div>
            <ul class="sidebar__list">
                <li><A href="/">"Resumen"</A></li>
                <li><A href="/productos">"Productos"</A></li>
                <li><A href="/categorias">"Categorías"</A></li>
                <li><A href="/proveedores">"Proveedores"</A></li>
                <li><A href="/compras">"Compras"</A></li>
                <li><A href="/ventas">"Ventas"</A></li>
                <li><A href="/movimientos">"Movimientos"</A></li>
                <li><A href="/stock-minimo">"Stock mínimo"</A></li>
                <li><A href="/usuarios">"Usuarios"</A></li>
                <li class="sidebar__footer"><A href="/login">"Salir"</A></li>
            </ul>
        </nav>
    }
}
