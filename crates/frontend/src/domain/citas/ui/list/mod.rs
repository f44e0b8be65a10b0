use contracts::domain::citas::{Cita, CreateCitaDto, EstadoCita, UpdateCitaDto};
use contracts::domain::personal::Empleado;
use contracts::domain::servicios::Servicio;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::citas::api;
use crate::domain::personal::api as personal_api;
use crate::domain::servicios::api as servicios_api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils::formato_fecha_hora;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

fn badge_estado(estado: EstadoCita) -> &'static str {
    match estado {
        EstadoCita::Pendiente => "badge badge--warning",
        EstadoCita::Confirmada => "badge badge--info",
        EstadoCita::Completada => "badge badge--success",
        EstadoCita::Cancelada => "badge badge--error",
    }
}

#[component]
pub fn CitasPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_citas", "ver_citas"]>
            <CitasList />
        </RequierePermiso>
    }
}

#[component]
fn CitasList() -> impl IntoView {
    let sesion = use_sesion();
    let all_citas: RwSignal<Vec<Cita>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (estado_filtro, set_estado_filtro) = signal(String::new());
    let editor: RwSignal<Option<Option<Cita>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Cita>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| tiene_capacidad(&s.claves, &["gestionar_citas"], Combinador::Cualquiera))
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_citas().await {
                Ok(data) => {
                    all_citas.set(data);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar las citas: {}", e)));
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
        let estado = estado_filtro.get();
        let mut data = all_citas.get();
        if !estado.is_empty() {
            data.retain(|c| c.estado.etiqueta() == estado);
        }
        if !query.is_empty() {
            data.retain(|c| {
                c.cliente.to_lowercase().contains(&query)
                    || c.servicio_nombre
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
                    || c.empleado_nombre
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }
        // Próximas primero
        data.sort_by(|a, b| a.inicia_en.cmp(&b.inicia_en));
        data
    });

    let confirm_delete = move || {
        let Some(cita) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_cita(cita.id).await {
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
        <PageFrame page_id="citas--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Citas"</h1>
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
                            " Nueva"
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
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="max-width: 280px;">
                                <Input
                                    value=search
                                    placeholder="Cliente, servicio o barbero..."
                                />
                            </div>
                            <select
                                class="form__select"
                                on:change=move |ev| set_estado_filtro.set(event_target_value(&ev))
                                prop:value=move || estado_filtro.get()
                            >
                                <option value="">"Todos los estados"</option>
                                <option value="Pendiente">"Pendiente"</option>
                                <option value="Confirmada">"Confirmada"</option>
                                <option value="Completada">"Completada"</option>
                                <option value="Cancelada">"Cancelada"</option>
                            </select>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=150.0>"Cliente"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Servicio"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Barbero"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Inicio"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Estado"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visibles.get()
                                key=|c| c.id
                                children=move |cita| {
                                    let cita_for_edit = cita.clone();
                                    let cita_for_delete = cita.clone();
                                    let inicio = formato_fecha_hora(&cita.inicia_en);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{cita.cliente.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {cita.servicio_nombre.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {cita.empleado_nombre.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{inicio}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=badge_estado(cita.estado)>{cita.estado.etiqueta()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let cita_for_edit = cita_for_edit.clone();
                                                        let cita_for_delete = cita_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editor.set(Some(Some(cita_for_edit.clone())))
                                                                attr:title="Editar"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(cita_for_delete.clone()))
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

                {move || editor.get().map(|cita| view! {
                    <EditorCitaForm
                        cita=cita
                        on_close=move || editor.set(None)
                        on_saved=move || {
                            editor.set(None);
                            load_data();
                        }
                    />
                })}

                {move || deleting.get().map(|cita| view! {
                    <ConfirmDialog
                        titulo="Eliminar cita".to_string()
                        mensaje=format!("¿Eliminar la cita de {}?", cita.cliente)
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
fn EditorCitaForm<F1, F2>(
    /// None = cita nueva
    cita: Option<Cita>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let cita_id = cita.as_ref().map(|c| c.id);
    let cliente = RwSignal::new(cita.as_ref().map(|c| c.cliente.clone()).unwrap_or_default());
    let telefono = RwSignal::new(
        cita.as_ref()
            .and_then(|c| c.telefono.clone())
            .unwrap_or_default(),
    );
    let servicio_id: RwSignal<Option<i64>> = RwSignal::new(cita.as_ref().map(|c| c.servicio_id));
    let empleado_id: RwSignal<Option<i64>> = RwSignal::new(cita.as_ref().map(|c| c.empleado_id));
    let inicia_en = RwSignal::new(
        cita.as_ref()
            .map(|c| c.inicia_en.trim_end_matches('Z').to_string())
            .unwrap_or_default(),
    );
    let estado = RwSignal::new(cita.as_ref().map(|c| c.estado).unwrap_or(EstadoCita::Pendiente));
    let notas = RwSignal::new(
        cita.as_ref()
            .and_then(|c| c.notas.clone())
            .unwrap_or_default(),
    );
    let servicios: RwSignal<Vec<Servicio>> = RwSignal::new(Vec::new());
    let empleados: RwSignal<Vec<Empleado>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    // Catálogos para los selects; las dos cargas son independientes.
    spawn_local(async move {
        match servicios_api::fetch_servicios().await {
            Ok(data) => servicios.set(data.into_iter().filter(|s| s.activo).collect()),
            Err(e) => log::error!("No se pudo cargar el catálogo de servicios: {}", e),
        }
    });
    spawn_local(async move {
        match personal_api::fetch_personal().await {
            Ok(data) => empleados.set(data.into_iter().filter(|e| e.activo).collect()),
            Err(e) => log::error!("No se pudo cargar la plantilla: {}", e),
        }
    });

    let titulo = if cita_id.is_none() {
        "Nueva cita".to_string()
    } else {
        format!("Edición: {}", cliente.get_untracked())
    };

    let on_save = move |_| {
        let cliente_val = cliente.get_untracked().trim().to_string();
        if cliente_val.is_empty() {
            set_error.set(Some("El nombre del cliente es obligatorio".to_string()));
            return;
        }
        let Some(servicio_val) = servicio_id.get_untracked() else {
            set_error.set(Some("Selecciona un servicio".to_string()));
            return;
        };
        let Some(empleado_val) = empleado_id.get_untracked() else {
            set_error.set(Some("Selecciona un barbero".to_string()));
            return;
        };
        let inicia_val = inicia_en.get_untracked().trim().to_string();
        if inicia_val.is_empty() {
            set_error.set(Some("La fecha y hora son obligatorias".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let telefono_val = {
            let t = telefono.get_untracked().trim().to_string();
            if t.is_empty() { None } else { Some(t) }
        };
        let notas_val = {
            let n = notas.get_untracked().trim().to_string();
            if n.is_empty() { None } else { Some(n) }
        };

        spawn_local(async move {
            let result = match cita_id {
                None => api::create_cita(CreateCitaDto {
                    cliente: cliente_val,
                    telefono: telefono_val,
                    servicio_id: servicio_val,
                    empleado_id: empleado_val,
                    inicia_en: inicia_val,
                    notas: notas_val,
                })
                .await
                .map(|_| ()),
                Some(id) => {
                    api::update_cita(UpdateCitaDto {
                        id,
                        cliente: cliente_val,
                        telefono: telefono_val,
                        servicio_id: servicio_val,
                        empleado_id: empleado_val,
                        inicia_en: inicia_val,
                        estado: estado.get_untracked(),
                        notas: notas_val,
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
                        <Label>"Cliente"</Label>
                        <Input
                            value=cliente
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
                        <Label>"Servicio"</Label>
                        <select
                            class="form__select"
                            disabled=move || saving.get()
                            on:change=move |ev| {
                                servicio_id.set(event_target_value(&ev).parse::<i64>().ok());
                            }
                            prop:value=move || {
                                servicio_id.get().map(|id| id.to_string()).unwrap_or_default()
                            }
                        >
                            <option value="">"Selecciona..."</option>
                            {move || servicios.get().into_iter().map(|s| {
                                let id = s.id.to_string();
                                view! {
                                    <option value=id selected=move || servicio_id.get() == Some(s.id)>
                                        {s.nombre.clone()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Barbero"</Label>
                        <select
                            class="form__select"
                            disabled=move || saving.get()
                            on:change=move |ev| {
                                empleado_id.set(event_target_value(&ev).parse::<i64>().ok());
                            }
                            prop:value=move || {
                                empleado_id.get().map(|id| id.to_string()).unwrap_or_default()
                            }
                        >
                            <option value="">"Selecciona..."</option>
                            {move || empleados.get().into_iter().map(|e| {
                                let id = e.id.to_string();
                                view! {
                                    <option value=id selected=move || empleado_id.get() == Some(e.id)>
                                        {e.nombre.clone()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Fecha y hora"</Label>
                        <input
                            type="datetime-local"
                            class="form__input"
                            prop:value=move || inicia_en.get()
                            on:input=move |ev| inicia_en.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>

                    <Show when=move || cita_id.is_some()>
                        <div class="form__group">
                            <Label>"Estado"</Label>
                            <select
                                class="form__select"
                                disabled=move || saving.get()
                                on:change=move |ev| {
                                    let nuevo = match event_target_value(&ev).as_str() {
                                        "Confirmada" => EstadoCita::Confirmada,
                                        "Completada" => EstadoCita::Completada,
                                        "Cancelada" => EstadoCita::Cancelada,
                                        _ => EstadoCita::Pendiente,
                                    };
                                    estado.set(nuevo);
                                }
                                prop:value=move || estado.get().etiqueta().to_string()
                            >
                                <option value="Pendiente">"Pendiente"</option>
                                <option value="Confirmada">"Confirmada"</option>
                                <option value="Completada">"Completada"</option>
                                <option value="Cancelada">"Cancelada"</option>
                            </select>
                        </div>
                    </Show>

                    <div class="form__group">
                        <Label>"Notas"</Label>
                        <Input
                            value=notas
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
