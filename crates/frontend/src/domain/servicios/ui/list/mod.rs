use contracts::domain::servicios::{CreateServicioDto, Servicio, UpdateServicioDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::servicios::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils::formato_moneda;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

impl Sortable for Servicio {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "precio" => self
                .precio
                .partial_cmp(&other.precio)
                .unwrap_or(std::cmp::Ordering::Equal),
            "duracion" => self.duracion_minutos.cmp(&other.duracion_minutos),
            "activo" => self.activo.cmp(&other.activo),
            _ => self
                .nombre
                .to_lowercase()
                .cmp(&other.nombre.to_lowercase()),
        }
    }
}

#[component]
pub fn ServiciosPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_servicios", "ver_servicios"]>
            <ServiciosList />
        </RequierePermiso>
    }
}

#[component]
fn ServiciosList() -> impl IntoView {
    let sesion = use_sesion();
    let all_servicios: RwSignal<Vec<Servicio>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (sort_field, set_sort_field) = signal("nombre".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let editor: RwSignal<Option<Option<Servicio>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Servicio>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| {
            tiene_capacidad(&s.claves, &["gestionar_servicios"], Combinador::Cualquiera)
        })
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_servicios().await {
                Ok(data) => {
                    all_servicios.set(data);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los servicios: {}", e)));
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

    let visibles = Memo::new(move |_| {
        let query = search.get().trim().to_lowercase();
        let mut data = all_servicios.get();
        if !query.is_empty() {
            data.retain(|s| {
                s.nombre.to_lowercase().contains(&query)
                    || s.descripcion
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }
        sort_list(&mut data, &sort_field.get(), sort_ascending.get());
        data
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get_untracked() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let confirm_delete = move || {
        let Some(servicio) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_servicio(servicio.id).await {
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
        <PageFrame page_id="servicios--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Servicios"</h1>
                    <Badge>
                        {move || visibles.get().len().to_string()}
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
                                <TableHeaderCell min_width=160.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("nombre")>
                                        "Nombre"
                                        <span class=move || get_sort_class(&sort_field.get(), "nombre")>
                                            {move || get_sort_indicator(&sort_field.get(), "nombre", sort_ascending.get())}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Descripción"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("precio")>
                                        "Precio"
                                        <span class=move || get_sort_class(&sort_field.get(), "precio")>
                                            {move || get_sort_indicator(&sort_field.get(), "precio", sort_ascending.get())}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("duracion")>
                                        "Duración"
                                        <span class=move || get_sort_class(&sort_field.get(), "duracion")>
                                            {move || get_sort_indicator(&sort_field.get(), "duracion", sort_ascending.get())}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Estado"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visibles.get()
                                key=|s| s.id
                                children=move |servicio| {
                                    let servicio_for_edit = servicio.clone();
                                    let servicio_for_delete = servicio.clone();
                                    let precio = formato_moneda(servicio.precio);
                                    let duracion = format!("{} min", servicio.duracion_minutos);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{servicio.nombre.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {servicio.descripcion.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{precio}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{duracion}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if servicio.activo {
                                                        view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Inactivo"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let servicio_for_edit = servicio_for_edit.clone();
                                                        let servicio_for_delete = servicio_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editor.set(Some(Some(servicio_for_edit.clone())))
                                                                attr:title="Editar"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(servicio_for_delete.clone()))
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

                {move || editor.get().map(|servicio| view! {
                    <EditorServicioForm
                        servicio=servicio
                        on_close=move || editor.set(None)
                        on_saved=move || {
                            editor.set(None);
                            load_data();
                        }
                    />
                })}

                {move || deleting.get().map(|servicio| view! {
                    <ConfirmDialog
                        titulo="Eliminar servicio".to_string()
                        mensaje=format!("¿Eliminar el servicio {}?", servicio.nombre)
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
fn EditorServicioForm<F1, F2>(
    /// None = nuevo servicio
    servicio: Option<Servicio>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let servicio_id = servicio.as_ref().map(|s| s.id);
    let nombre = RwSignal::new(servicio.as_ref().map(|s| s.nombre.clone()).unwrap_or_default());
    let descripcion = RwSignal::new(
        servicio
            .as_ref()
            .and_then(|s| s.descripcion.clone())
            .unwrap_or_default(),
    );
    let precio = RwSignal::new(
        servicio
            .as_ref()
            .map(|s| format!("{:.2}", s.precio))
            .unwrap_or_default(),
    );
    let duracion = RwSignal::new(
        servicio
            .as_ref()
            .map(|s| s.duracion_minutos.to_string())
            .unwrap_or_else(|| "30".to_string()),
    );
    let activo = RwSignal::new(servicio.as_ref().map(|s| s.activo).unwrap_or(true));
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let titulo = if servicio_id.is_none() {
        "Nuevo servicio".to_string()
    } else {
        format!("Edición: {}", nombre.get_untracked())
    };

    let on_save = move |_| {
        let nombre_val = nombre.get_untracked().trim().to_string();
        if nombre_val.is_empty() {
            set_error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }
        let Ok(precio_val) = precio.get_untracked().replace(',', ".").parse::<f64>() else {
            set_error.set(Some("Precio inválido".to_string()));
            return;
        };
        let Ok(duracion_val) = duracion.get_untracked().trim().parse::<u32>() else {
            set_error.set(Some("Duración inválida".to_string()));
            return;
        };
        set_saving.set(true);
        set_error.set(None);

        let descripcion_val = {
            let d = descripcion.get_untracked().trim().to_string();
            if d.is_empty() { None } else { Some(d) }
        };

        spawn_local(async move {
            let result = match servicio_id {
                None => api::create_servicio(CreateServicioDto {
                    nombre: nombre_val,
                    descripcion: descripcion_val,
                    precio: precio_val,
                    duracion_minutos: duracion_val,
                })
                .await
                .map(|_| ()),
                Some(id) => {
                    api::update_servicio(UpdateServicioDto {
                        id,
                        nombre: nombre_val,
                        descripcion: descripcion_val,
                        precio: precio_val,
                        duracion_minutos: duracion_val,
                        activo: activo.get_untracked(),
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
                        <Label>"Precio"</Label>
                        <Input
                            value=precio
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Duración (minutos)"</Label>
                        <Input
                            value=duracion
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <Show when=move || servicio_id.is_some()>
                        <div class="form__group">
                            <Checkbox checked=activo label="Activo" />
                        </div>
                    </Show>
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
