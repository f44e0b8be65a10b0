use contracts::domain::personal::{CreateEmpleadoDto, Empleado, UpdateEmpleadoDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::personal::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils::formato_fecha;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

impl Sortable for Empleado {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "especialidad" => self
                .especialidad
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.especialidad.as_deref().unwrap_or("").to_lowercase()),
            "comision" => self
                .porcentaje_comision
                .partial_cmp(&other.porcentaje_comision)
                .unwrap_or(std::cmp::Ordering::Equal),
            "contratado_en" => self.contratado_en.cmp(&other.contratado_en),
            "activo" => self.activo.cmp(&other.activo),
            _ => self
                .nombre
                .to_lowercase()
                .cmp(&other.nombre.to_lowercase()),
        }
    }
}

#[component]
pub fn PersonalPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_personal", "ver_personal"]>
            <PersonalList />
        </RequierePermiso>
    }
}

#[component]
fn PersonalList() -> impl IntoView {
    let sesion = use_sesion();
    let all_empleados: RwSignal<Vec<Empleado>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (sort_field, set_sort_field) = signal("nombre".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let editor: RwSignal<Option<Option<Empleado>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Empleado>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| tiene_capacidad(&s.claves, &["gestionar_personal"], Combinador::Cualquiera))
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_personal().await {
                Ok(data) => {
                    all_empleados.set(data);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudo cargar el personal: {}", e)));
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
        let mut data = all_empleados.get();
        if !query.is_empty() {
            data.retain(|e| {
                e.nombre.to_lowercase().contains(&query)
                    || e.especialidad
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
                    || e.correo
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
        let Some(empleado) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_empleado(empleado.id).await {
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
        <PageFrame page_id="personal--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Personal"</h1>
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
                                placeholder="Nombre, especialidad o correo..."
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
                                <TableHeaderCell min_width=140.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("especialidad")>
                                        "Especialidad"
                                        <span class=move || get_sort_class(&sort_field.get(), "especialidad")>
                                            {move || get_sort_indicator(&sort_field.get(), "especialidad", sort_ascending.get())}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Contacto"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("comision")>
                                        "Comisión"
                                        <span class=move || get_sort_class(&sort_field.get(), "comision")>
                                            {move || get_sort_indicator(&sort_field.get(), "comision", sort_ascending.get())}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=110.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("contratado_en")>
                                        "Contratación"
                                        <span class=move || get_sort_class(&sort_field.get(), "contratado_en")>
                                            {move || get_sort_indicator(&sort_field.get(), "contratado_en", sort_ascending.get())}
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
                                key=|e| e.id
                                children=move |empleado| {
                                    let empleado_for_edit = empleado.clone();
                                    let empleado_for_delete = empleado.clone();
                                    let comision = format!("{:.0}%", empleado.porcentaje_comision);
                                    let contratado = formato_fecha(&empleado.contratado_en);
                                    let contacto = empleado
                                        .correo
                                        .clone()
                                        .or_else(|| empleado.telefono.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{empleado.nombre.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {empleado.especialidad.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{contacto}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{comision}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{contratado}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if empleado.activo {
                                                        view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Baja"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let empleado_for_edit = empleado_for_edit.clone();
                                                        let empleado_for_delete = empleado_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editor.set(Some(Some(empleado_for_edit.clone())))
                                                                attr:title="Editar"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(empleado_for_delete.clone()))
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

                {move || editor.get().map(|empleado| view! {
                    <EditorEmpleadoForm
                        empleado=empleado
                        on_close=move || editor.set(None)
                        on_saved=move || {
                            editor.set(None);
                            load_data();
                        }
                    />
                })}

                {move || deleting.get().map(|empleado| view! {
                    <ConfirmDialog
                        titulo="Dar de baja".to_string()
                        mensaje=format!("¿Eliminar a {} de la plantilla?", empleado.nombre)
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
fn EditorEmpleadoForm<F1, F2>(
    /// None = alta nueva
    empleado: Option<Empleado>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let empleado_id = empleado.as_ref().map(|e| e.id);
    let nombre = RwSignal::new(empleado.as_ref().map(|e| e.nombre.clone()).unwrap_or_default());
    let correo = RwSignal::new(
        empleado
            .as_ref()
            .and_then(|e| e.correo.clone())
            .unwrap_or_default(),
    );
    let telefono = RwSignal::new(
        empleado
            .as_ref()
            .and_then(|e| e.telefono.clone())
            .unwrap_or_default(),
    );
    let especialidad = RwSignal::new(
        empleado
            .as_ref()
            .and_then(|e| e.especialidad.clone())
            .unwrap_or_default(),
    );
    let comision = RwSignal::new(
        empleado
            .as_ref()
            .map(|e| format!("{:.0}", e.porcentaje_comision))
            .unwrap_or_else(|| "30".to_string()),
    );
    let activo = RwSignal::new(empleado.as_ref().map(|e| e.activo).unwrap_or(true));
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let titulo = if empleado_id.is_none() {
        "Nuevo empleado".to_string()
    } else {
        format!("Edición: {}", nombre.get_untracked())
    };

    let opt = |signal: RwSignal<String>| {
        let v = signal.get_untracked().trim().to_string();
        if v.is_empty() {
            None
        } else {
            Some(v)
        }
    };

    let on_save = move |_| {
        let nombre_val = nombre.get_untracked().trim().to_string();
        if nombre_val.is_empty() {
            set_error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }
        let Ok(comision_val) = comision.get_untracked().replace(',', ".").parse::<f64>() else {
            set_error.set(Some("Porcentaje de comisión inválido".to_string()));
            return;
        };
        if !(0.0..=100.0).contains(&comision_val) {
            set_error.set(Some("La comisión debe estar entre 0 y 100".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let correo_val = opt(correo);
        let telefono_val = opt(telefono);
        let especialidad_val = opt(especialidad);

        spawn_local(async move {
            let result = match empleado_id {
                None => api::create_empleado(CreateEmpleadoDto {
                    nombre: nombre_val,
                    correo: correo_val,
                    telefono: telefono_val,
                    especialidad: especialidad_val,
                    porcentaje_comision: comision_val,
                })
                .await
                .map(|_| ()),
                Some(id) => {
                    api::update_empleado(UpdateEmpleadoDto {
                        id,
                        nombre: nombre_val,
                        correo: correo_val,
                        telefono: telefono_val,
                        especialidad: especialidad_val,
                        porcentaje_comision: comision_val,
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
                        <Label>"Correo"</Label>
                        <Input
                            value=correo
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Teléfono"</Label>
                        <Input
                            value=telefono
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Especialidad"</Label>
                        <Input
                            value=especialidad
                            placeholder="Corte clásico, barba..."
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Comisión (%)"</Label>
                        <Input
                            value=comision
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <Show when=move || empleado_id.is_some()>
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
