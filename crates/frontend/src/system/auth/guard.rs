use leptos::prelude::*;

use super::capability::{tiene_capacidad, Combinador};
use super::context::{use_sesion, FaseSesion};

/// Component that gates a routed page behind permission keys (OR semantics).
///
/// Fails closed: while the resolver is still loading, nothing is rendered;
/// once it settles, a missing key shows the denied view instead of the page.
#[component]
pub fn RequierePermiso(
    /// Keys that unlock the page; any one of them suffices.
    claves: &'static [&'static str],
    children: ChildrenFn,
) -> impl IntoView {
    let sesion = use_sesion();

    let permitido = move || {
        sesion.with(|s| {
            s.fase == FaseSesion::Lista
                && tiene_capacidad(&s.claves, claves, Combinador::Cualquiera)
        })
    };

    let pendiente = move || sesion.with(|s| s.fase == FaseSesion::Cargando);

    view! {
        <Show
            when=permitido
            fallback=move || {
                if pendiente() {
                    view! { <div class="page-loading">"Cargando..."</div> }.into_any()
                } else {
                    view! { <AccesoDenegado /> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn AccesoDenegado() -> impl IntoView {
    view! {
        <div class="page page--denied">
            <h1>"Acceso denegado"</h1>
            <p>"Tu rol no tiene permiso para ver esta sección."</p>
        </div>
    }
}
