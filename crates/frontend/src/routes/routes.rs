use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::app_shell::MainLayout;
use crate::dashboards::d100_resumen::ui::InicioDashboard;
use crate::dashboards::d101_reportes::ui::ReportesPage;
use crate::domain::auditoria::ui::list::AuditoriaPage;
use crate::domain::citas::ui::list::CitasPage;
use crate::domain::comisiones::ui::list::ComisionesPage;
use crate::domain::gastos::ui::list::GastosPage;
use crate::domain::mensajes::ui::list::MensajesPage;
use crate::domain::permisos::ui::list::PermisosPage;
use crate::domain::personal::ui::list::PersonalPage;
use crate::domain::productos::ui::list::ProductosPage;
use crate::domain::roles::ui::list::RolesPage;
use crate::domain::servicios::ui::list::ServiciosPage;
use crate::domain::usuarios::ui::list::UsuariosPage;
use crate::domain::ventas::ui::list::VentasPage;
use crate::system::auth::context::SesionProvider;
use crate::system::pages::login::LoginPage;
use crate::system::pages::no_encontrado::NoEncontrado;

/// Route table. `/login` stays outside the gated layout; everything under
/// `MainLayout` waits for the session resolver before rendering.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <SesionProvider>
                <Routes fallback=|| view! { <NoEncontrado /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <ParentRoute path=path!("") view=MainLayout>
                        <Route path=path!("") view=InicioDashboard />
                        <Route path=path!("usuarios") view=UsuariosPage />
                        <Route path=path!("roles") view=RolesPage />
                        <Route path=path!("permisos") view=PermisosPage />
                        <Route path=path!("servicios") view=ServiciosPage />
                        <Route path=path!("productos") view=ProductosPage />
                        <Route path=path!("personal") view=PersonalPage />
                        <Route path=path!("citas") view=CitasPage />
                        <Route path=path!("ventas") view=VentasPage />
                        <Route path=path!("gastos") view=GastosPage />
                        <Route path=path!("comisiones") view=ComisionesPage />
                        <Route path=path!("reportes") view=ReportesPage />
                        <Route path=path!("auditoria") view=AuditoriaPage />
                        <Route path=path!("mensajes") view=MensajesPage />
                    </ParentRoute>
                </Routes>
            </SesionProvider>
        </Router>
    }
}
