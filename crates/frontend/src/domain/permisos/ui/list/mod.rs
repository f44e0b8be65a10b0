use contracts::domain::roles::Permiso;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::permisos::api::{self, PermisoDto};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

#[component]
pub fn PermisosPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_permisos", "ver_permisos"]>
            <PermisosList />
        </RequierePermiso>
    }
}

#[component]
fn PermisosList() -> impl IntoView {
    let sesion = use_sesion();
    let all_permisos: RwSignal<Vec<Permiso>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);
    let editor: RwSignal<Option<Option<Permiso>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Permiso>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| tiene_capacidad(&s.claves, &["gestionar_permisos"], Combinador::Cualquiera))
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_permisos().await {
                Ok(data) => {
                    all_permisos.set(data);
                    set_is_loaded.set(true);
                    set_page.set(0);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los permisos: {}", e)));
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

    let filtrados = Memo::new(move |_| {
        let query = search.get().trim().to_lowercase();
        let mut data = all_permisos.get();
        if !query.is_empty() {
            data.retain(|p| {
                p.clave.to_lowercase().contains(&query)
                    || p.descripcion
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }
        data.sort_by(|a, b| a.clave.cmp(&b.clave));
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
        let Some(permiso) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_permiso(permiso.id).await {
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
        <PageFrame page_id="permisos--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Permisos"</h1>
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
                                placeholder="Clave o descripción..."
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Clave"</TableHeaderCell>
                                <TableHeaderCell min_width=260.0>"Descripción"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visibles.get()
                                key=|p| p.id
                                children=move |permiso| {
                                    let permiso_for_edit = permiso.clone();
                                    let permiso_for_delete = permiso.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <code class="permiso-clave">{permiso.clave.clone()}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {permiso.descripcion.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let permiso_for_edit = permiso_for_edit.clone();
                                                        let permiso_for_delete = permiso_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editor.set(Some(Some(permiso_for_edit.clone())))
                                                                attr:title="Editar"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(permiso_for_delete.clone()))
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

                {move || editor.get().map(|permiso| view! {
                    <EditorPermisoForm
                        permiso=permiso
                        on_close=move || editor.set(None)
                        on_saved=move || {
                            editor.set(None);
                            load_data();
                        }
                    />
                })}

                {move || deleting.get().map(|permiso| view! {
                    <ConfirmDialog
                        titulo="Eliminar permiso".to_string()
                        mensaje=format!("¿Eliminar la clave {}? Los roles que la incluyan la perderán.", permiso.clave)
                        on_confirm=move || confirm_delete()
                        on_cancel=move || deleting.set(None)
                        ocupado=Signal::derive(move || deleting_busy.get())
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[component]
fn EditorPermisoForm<F1, F2>(
    /// None = nueva clave
    permiso: Option<Permiso>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let permiso_id = permiso.as_ref().map(|p| p.id);
    let clave = RwSignal::new(permiso.as_ref().map(|p| p.clave.clone()).unwrap_or_default());
    let descripcion = RwSignal::new(
        permiso
            .as_ref()
            .and_then(|p| p.descripcion.clone())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let titulo = if permiso_id.is_none() {
        "Nuevo permiso".to_string()
    } else {
        format!("Edición: {}", clave.get_untracked())
    };

    let on_save = move |_| {
        let clave_val = clave.get_untracked().trim().to_string();
        if clave_val.is_empty() {
            set_error.set(Some("La clave es obligatoria".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let dto = PermisoDto {
            clave: clave_val,
            descripcion: {
                let d = descripcion.get_untracked().trim().to_string();
                if d.is_empty() { None } else { Some(d) }
            },
        };

        spawn_local(async move {
            let result = match permiso_id {
                None => api::create_permiso(dto).await.map(|_| ()),
                Some(id) => api::update_permiso(id, dto).await,
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
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
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
                        <Label>"Clave"</Label>
                        <Input
                            value=clave
                            placeholder="ver_usuarios"
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
