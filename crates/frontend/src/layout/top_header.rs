use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;
use super::LayoutContext;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<LayoutContext>().expect("LayoutContext not found");
    let sesion = use_sesion();

    let correo = move || {
        sesion.with(|s| {
            s.identidad
                .as_ref()
                .map(|i| i.correo.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <header class="app-topbar">
            <div class="app-topbar__left">
                <button
                    class="app-topbar__toggle"
                    on:click=move |_| ctx.alternar_sidebar()
                    title="Mostrar/ocultar menú"
                >
                    {icon("menu")}
                </button>
                <span class="app-topbar__brand">"Barbería Admin"</span>
            </div>
            <div class="app-topbar__right">
                <span class="app-topbar__user">{correo}</span>
            </div>
        </header>
    }
}
