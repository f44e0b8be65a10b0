use std::collections::HashSet;

use contracts::domain::roles::{CreateRolDto, Permiso, Rol, UpdateRolDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::permisos::api as permisos_api;
use crate::domain::roles::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

#[component]
pub fn RolesPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_roles", "ver_roles"]>
            <RolesList />
        </RequierePermiso>
    }
}

#[component]
fn RolesList() -> impl IntoView {
    let sesion = use_sesion();
    let all_roles: RwSignal<Vec<Rol>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);
    // None = cerrado, Some(None) = crear, Some(Some(rol)) = editar
    let editor: RwSignal<Option<Option<Rol>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Rol>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| tiene_capacidad(&s.claves, &["gestionar_roles"], Combinador::Cualquiera))
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_roles().await {
                Ok(data) => {
                    all_roles.set(data);
                    set_is_loaded.set(true);
                    set_page.set(0);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los roles: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            load_data();
        }
    });

    // Filtrado y paginación en cliente: el catálogo de roles es pequeño.
    let filtrados = Memo::new(move |_| {
        let query = search.get().trim().to_lowercase();
        let mut data = all_roles.get();
        if !query.is_empty() {
            data.retain(|r| {
                r.nombre.to_lowercase().contains(&query)
                    || r.descripcion
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }
        data
    });

    let total_count = Memo::new(move |_| filtrados.get().len());
    let total_pages = Memo::new(move |_| {
        let count = total_count.get();
        if count == 0 {
            1
        } else {
            (count + page_size.get() - 1) / page_size.get()
        }
    });

    let visibles = Memo::new(move |_| {
        let data = filtrados.get();
        let start = page.get().min(total_pages.get().saturating_sub(1)) * page_size.get();
        let end = (start + page_size.get()).min(data.len());
        data.get(start..end).unwrap_or(&[]).to_vec()
    });

    let confirm_delete = move || {
        let Some(rol) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_rol(rol.id).await {
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

    view! {
        <PageFrame page_id="roles--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Roles"</h1>
                    <Badge>
                        {move || total_count.get().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Show when=puede_gestionar>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| editor.set(Some(None))
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
                                current_page=Signal::derive(move || page.get())
                                total_pages=Signal::derive(move || total_pages.get())
                                total_count=Signal::derive(move || total_count.get())
                                page_size=Signal::derive(move || page_size.get())
                                on_page_change=Callback::new(move |p| set_page.set(p))
                                on_page_size_change=Callback::new(move |s| {
                                    set_page_size.set(s);
                                    set_page.set(0);
                                })
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <div style="max-width: 320px;">
                            <Input
                                value=search
                                placeholder="Nombre o descripción..."
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=140.0>"Nombre"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Descripción"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Permisos"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visibles.get()
                                key=|r| r.id
                                children=move |rol| {
                                    let rol_for_edit = rol.clone();
                                    let rol_for_delete = rol.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{rol.nombre.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {rol.descripcion.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge>{rol.permisos.len().to_string()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let rol_for_edit = rol_for_edit.clone();
                                                        let rol_for_delete = rol_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editor.set(Some(Some(rol_for_edit.clone())))
                                                                attr:title="Editar"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(rol_for_delete.clone()))
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

                {move || editor.get().map(|rol| view! {
                    <EditorRolForm
                        rol=rol
                        on_close=move || editor.set(None)
                        on_saved=move || {
                            editor.set(None);
                            load_data();
                        }
                    />
                })}

                {move || deleting.get().map(|rol| view! {
                    <ConfirmDialog
                        titulo="Eliminar rol".to_string()
                        mensaje=format!("¿Eliminar el rol {}? Los usuarios asignados quedarán sin permisos.", rol.nombre)
                        on_confirm=move || confirm_delete()
                        on_cancel=move || deleting.set(None)
                        ocupado=Signal::derive(move || deleting_busy.get())
                    />
                })}
            </div>
        </PageFrame>
    }
}

/// Create/edit dialog with the permission checkbox matrix.
#[component]
fn EditorRolForm<F1, F2>(
    /// None = nuevo rol
    rol: Option<Rol>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let es_nuevo = rol.is_none();
    let rol_id = rol.as_ref().map(|r| r.id);
    let nombre = RwSignal::new(rol.as_ref().map(|r| r.nombre.clone()).unwrap_or_default());
    let descripcion = RwSignal::new(
        rol.as_ref()
            .and_then(|r| r.descripcion.clone())
            .unwrap_or_default(),
    );
    let asignados: RwSignal<HashSet<i64>> = RwSignal::new(
        rol.as_ref()
            .map(|r| r.permisos.iter().map(|p| p.id).collect())
            .unwrap_or_default(),
    );
    let catalogo: RwSignal<Vec<Permiso>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match permisos_api::fetch_permisos().await {
            Ok(data) => catalogo.set(data),
            Err(e) => {
                set_error.set(Some(format!("No se pudo cargar el catálogo de permisos: {}", e)))
            }
        }
    });

    let titulo = if es_nuevo {
        "Nuevo rol".to_string()
    } else {
        format!("Edición: {}", nombre.get_untracked())
    };

    let on_save = move |_| {
        if nombre.get_untracked().trim().is_empty() {
            set_error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let nombre_val = nombre.get_untracked().trim().to_string();
        let descripcion_val = {
            let d = descripcion.get_untracked().trim().to_string();
            if d.is_empty() { None } else { Some(d) }
        };
        let permiso_ids: Vec<i64> = asignados.get_untracked().into_iter().collect();

        spawn_local(async move {
            let result = match rol_id {
                None => api::create_rol(CreateRolDto {
                    nombre: nombre_val,
                    descripcion: descripcion_val,
                    permiso_ids,
                })
                .await
                .map(|_| ()),
                Some(id) => {
                    api::update_rol(UpdateRolDto {
                        id,
                        nombre: nombre_val,
                        descripcion: descripcion_val,
                        permiso_ids,
                    })
                    .await
                }
            };
            match result {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Error al guardar: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{titulo}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Nombre"</Label>
                        <Input
                            value=nombre
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Descripción"</Label>
                        <Input
                            value=descripcion
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Permisos del rol"</Label>
                        <div class="permission-grid">
                            <For
                                each=move || catalogo.get()
                                key=|p| p.id
                                children=move |permiso| {
                                    let id = permiso.id;
                                    let marcado = Signal::derive(move || {
                                        asignados.with(|set| set.contains(&id))
                                    });
                                    view! {
                                        <label class="permission-grid__item">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || marcado.get()
                                                on:change=move |_| {
                                                    asignados.update(|set| {
                                                        if !set.insert(id) {
                                                            set.remove(&id);
                                                        }
                                                    });
                                                }
                                            />
                                            <span class="permission-grid__clave">{permiso.clave.clone()}</span>
                                            <span class="permission-grid__desc">
                                                {permiso.descripcion.clone().unwrap_or_default()}
                                            </span>
                                        </label>
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
