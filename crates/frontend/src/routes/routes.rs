use crate::dashboards::d401_resumen_categorias::ui::ResumenCategoriasPage;
use crate::domain::a001_categoria::ui::CategoriasPage;
use crate::domain::a002_proveedor::ui::ProveedoresPage;
use crate::domain::a003_producto::ui::ProductosPage;
use crate::domain::a004_compras::ui::ComprasPage;
use crate::domain::a005_ventas::ui::VentasPage;
use crate::domain::a006_movimientos::ui::MovimientosPage;
use crate::layout::Shell;
use crate::projections::p901_stock_minimo::ui::StockMinimoPage;
use crate::system::pages::login::LoginPage;
use crate::system::usuarios::ui::UsuariosPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Página no encontrada"</p> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("/") view=ResumenCategoriasPage />
                    <Route path=path!("/categorias") view=CategoriasPage />
                    <Route path=path!("/proveedores") view=ProveedoresPage />
                    <Route path=path!("/productos") view=ProductosPage />
                    <Route path=path!("/compras") view=ComprasPage />
                    <Route path=path!("/ventas") view=VentasPage />
                    <Route path=path!("/movimientos") view=MovimientosPage />
                    <Route path=path!("/stock-minimo") view=StockMinimoPage />
                    <Route path=path!("/usuarios") view=UsuariosPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
