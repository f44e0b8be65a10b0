//! Sidebar: renders the gated menu and the session footer.
//!
//! All visibility decisions come from `nav`; this component only draws what
//! the gate returns. While the resolver is loading nothing gated is drawn,
//! so a slow role lookup never flashes unauthorized entries.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::nav::{
    entrada_activa, grupo_abierto_inicial, items_visibles, menu_principal, EntradaMenu, GrupoMenu,
    ItemMenu,
};
use crate::shared::icons::icon;
use crate::system::auth::context::{cerrar_sesion, use_sesion, FaseSesion};

#[component]
pub fn Sidebar() -> impl IntoView {
    let sesion = use_sesion();
    let location = use_location();
    let pathname = location.pathname;

    // Initial expansion is derived from the mount path once; afterwards the
    // user owns the toggle state.
    let grupos_abiertos: RwSignal<Vec<&'static str>> = RwSignal::new({
        let ruta = pathname.get_untracked();
        menu_principal()
            .iter()
            .filter_map(|item| match item {
                ItemMenu::Grupo(g) if grupo_abierto_inicial(&ruta, g) => Some(g.id),
                _ => None,
            })
            .collect()
    });

    let items = move || {
        sesion.with(|s| match s.fase {
            FaseSesion::Lista => items_visibles(&s.claves),
            FaseSesion::Cargando | FaseSesion::Redirigida => Vec::new(),
        })
    };

    let correo = move || {
        sesion.with(|s| {
            s.identidad
                .as_ref()
                .map(|i| i.correo.clone())
                .unwrap_or_default()
        })
    };

    let al_cerrar = move |_| {
        spawn_local(async move {
            cerrar_sesion(sesion).await;
        });
    };

    view! {
        <div class="app-sidebar__content">
            <nav class="app-sidebar__nav">
                {move || {
                    items()
                        .into_iter()
                        .map(|item| match item {
                            ItemMenu::Entrada(e) => {
                                render_entrada(e, pathname, false).into_any()
                            }
                            ItemMenu::Grupo(g) => {
                                render_grupo(g, pathname, grupos_abiertos).into_any()
                            }
                        })
                        .collect_view()
                }}
            </nav>

            <div class="app-sidebar__footer">
                <span class="app-sidebar__user" title="Sesión actual">{correo}</span>
                <button class="app-sidebar__logout" on:click=al_cerrar>
                    {icon("log-out")}
                    <span>"Cerrar sesión"</span>
                </button>
            </div>
        </div>
    }
}

fn render_entrada(e: EntradaMenu, pathname: Memo<String>, hijo: bool) -> impl IntoView {
    let ruta = e.ruta;
    view! {
        <A href=ruta>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || entrada_activa(&pathname.get(), ruta)
                class:app-sidebar__item--child=hijo
            >
                <div class="app-sidebar__item-content">
                    {icon(e.icono)}
                    <span>{e.etiqueta}</span>
                </div>
            </div>
        </A>
    }
}

fn render_grupo(
    g: GrupoMenu,
    pathname: Memo<String>,
    abiertos: RwSignal<Vec<&'static str>>,
) -> impl IntoView {
    let id = g.id;
    let expandido = move || abiertos.get().contains(&id);
    let entradas = g.entradas;

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__item"
                on:click=move |_| {
                    abiertos.update(|ids| {
                        if let Some(pos) = ids.iter().position(|x| *x == id) {
                            ids.remove(pos);
                        } else {
                            ids.push(id);
                        }
                    });
                }
            >
                <div class="app-sidebar__item-content">
                    {icon(g.icono)}
                    <span>{g.etiqueta}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=expandido
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=expandido>
                <div class="app-sidebar__children">
                    {entradas
                        .clone()
                        .into_iter()
                        .map(|e| render_entrada(e, pathname, true))
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
