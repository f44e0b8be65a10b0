//! Application shell - session gate around the routed layout.
//!
//! Renders:
//! - a neutral splash while the resolver is still loading (nothing gated
//!   ever hits the DOM before permissions are known)
//! - nothing when the resolver decided to redirect (navigation in flight)
//! - the full layout once the session is resolved

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::layout::Shell;
use crate::system::auth::context::{use_sesion, FaseSesion};

#[component]
fn PantallaCarga() -> impl IntoView {
    view! {
        <div class="app-splash">
            <span class="app-splash__spinner"></span>
            <span>"Cargando sesión..."</span>
        </div>
    }
}

#[component]
pub fn MainLayout() -> impl IntoView {
    let sesion = use_sesion();

    view! {
        {move || match sesion.with(|s| s.fase) {
            FaseSesion::Cargando => view! { <PantallaCarga /> }.into_any(),
            FaseSesion::Redirigida => view! { <></> }.into_any(),
            FaseSesion::Lista => view! {
                <Shell>
                    <Outlet />
                </Shell>
            }.into_any(),
        }}
    }
}
