mod state;

use contracts::domain::usuarios::Usuario;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::formato_fecha_hora;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;
use crate::domain::usuarios::api;
use state::{create_state, UsuariosListState};

impl Sortable for Usuario {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "correo" => self
                .correo
                .to_lowercase()
                .cmp(&other.correo.to_lowercase()),
            "rol" => self
                .rol_nombre
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.rol_nombre.as_deref().unwrap_or("").to_lowercase()),
            "activo" => self.activo.cmp(&other.activo),
            "creado_en" => self.creado_en.cmp(&other.creado_en),
            "ultimo_acceso" => self
                .ultimo_acceso
                .as_deref()
                .unwrap_or("")
                .cmp(other.ultimo_acceso.as_deref().unwrap_or("")),
            _ => self
                .nombre
                .to_lowercase()
                .cmp(&other.nombre.to_lowercase()),
        }
    }
}

#[component]
pub fn UsuariosPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_usuarios", "ver_usuarios"]>
            <UsuariosList />
        </RequierePermiso>
    }
}

fn recalc_pagination(state: &mut UsuariosListState) {
    let total_pages = if state.total_count == 0 {
        1
    } else {
        (state.total_count + state.page_size - 1) / state.page_size
    };
    state.total_pages = total_pages;
    if state.page >= total_pages {
        state.page = total_pages.saturating_sub(1);
    }
}

#[component]
fn UsuariosList() -> impl IntoView {
    let sesion = use_sesion();
    let state = create_state();
    let all_usuarios: RwSignal<Vec<Usuario>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Usuario>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Usuario>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    // Los botones de escritura sólo aparecen con la clave de gestión;
    // ver_usuarios deja la pantalla en modo lectura.
    let puede_gestionar = move || {
        sesion.with(|s| tiene_capacidad(&s.claves, &["gestionar_usuarios"], Combinador::Cualquiera))
    };

    let refresh_view = move || {
        let query = state.with_untracked(|s| s.search_query.to_lowercase());
        let mut data = all_usuarios.get_untracked();
        if !query.is_empty() {
            data.retain(|u| {
                u.nombre.to_lowercase().contains(&query)
                    || u.correo.to_lowercase().contains(&query)
                    || u.rol_nombre
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            recalc_pagination(s);
            let start = s.page * s.page_size;
            let end = (start + s.page_size).min(data.len());
            s.items = data.get(start..end).unwrap_or(&[]).to_vec();
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_usuarios().await {
                Ok(data) => {
                    all_usuarios.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los usuarios: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());

    let apply_search = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.page = 0;
        });
        refresh_view();
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            refresh_view();
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| {
            s.page = page;
        });
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    let confirm_delete = move || {
        let Some(usuario) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_usuario(usuario.id).await {
                Ok(_) => {
                    deleting.set(None);
                    set_deleting_busy.set(false);
                    load_data();
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudo eliminar: {}", e)));
                    deleting.set(None);
                    set_deleting_busy.set(false);
                }
            }
        });
    };

    let format_ts = |value: &str| formato_fecha_hora(value);
    let format_ts_opt = |value: &Option<String>| {
        value
            .as_deref()
            .map(formato_fecha_hora)
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <PageFrame page_id="usuarios--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Usuarios"</h1>
                    <Badge>
                        {move || state.get().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Show when=puede_gestionar>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| set_show_create_form.set(true)
                        >
                            {icon("plus")}
                            " Nuevo"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Búsqueda"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=search_signal
                                    placeholder="Nombre, correo o rol..."
                                />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_search()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Buscar"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_signal.set(String::new());
                                    state.update(|s| {
                                        s.search_query = String::new();
                                        s.page = 0;
                                    });
                                    refresh_view();
                                }
                            >
                                "Limpiar"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("nombre")>
                                        "Nombre"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "nombre"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "nombre", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=180.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("correo")>
                                        "Correo"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "correo"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "correo", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("rol")>
                                        "Rol"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "rol"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "rol", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("activo")>
                                        "Estado"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "activo"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "activo", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("creado_en")>
                                        "Creado"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "creado_en"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "creado_en", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("ultimo_acceso")>
                                        "Último acceso"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "ultimo_acceso"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "ultimo_acceso", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| u.id
                                children=move |usuario| {
                                    let usuario_for_edit = usuario.clone();
                                    let usuario_for_delete = usuario.clone();
                                    let creado = format_ts(&usuario.creado_en);
                                    let ultimo = format_ts_opt(&usuario.ultimo_acceso);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{usuario.nombre.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {usuario.correo.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {usuario.rol_nombre.clone().unwrap_or_else(|| "Sin rol".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if usuario.activo {
                                                        view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Bloqueado"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{creado}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{ultimo}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let usuario_for_edit = usuario_for_edit.clone();
                                                        let usuario_for_delete = usuario_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editing.set(Some(usuario_for_edit.clone()))
                                                                attr:title="Editar"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(usuario_for_delete.clone()))
                                                                attr:title="Eliminar"
                                                            >
                                                                {icon("trash")}
                                                            </Button>
                                                        }
                                                    }
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || if show_create_form.get() {
                    view! {
                        <super::details::CreateUsuarioForm
                            on_close=move || set_show_create_form.set(false)
                            on_created=move || {
                                set_show_create_form.set(false);
                                load_data();
                            }
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing.get().map(|usuario| view! {
                    <super::details::EditUsuarioForm
                        usuario=usuario
                        on_close=move || editing.set(None)
                        on_saved=move || {
                            editing.set(None);
                            load_data();
                        }
                    />
                })}

                {move || deleting.get().map(|usuario| view! {
                    <ConfirmDialog
                        titulo="Eliminar usuario".to_string()
                        mensaje=format!("¿Eliminar a {}? Esta acción no se puede deshacer.", usuario.correo)
                        on_confirm=move || confirm_delete()
                        on_cancel=move || deleting.set(None)
                        ocupado=Signal::derive(move || deleting_busy.get())
                    />
                })}
            </div>
        </PageFrame>
    }
}
