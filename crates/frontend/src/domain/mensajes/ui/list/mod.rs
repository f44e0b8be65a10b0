use contracts::domain::mensajes::Mensaje;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::mensajes::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils::formato_fecha_hora;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

impl Searchable for Mensaje {
    fn matches_filter(&self, filter: &str) -> bool {
        self.nombre.to_lowercase().contains(filter)
            || self.correo.to_lowercase().contains(filter)
            || self
                .asunto
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(filter)
    }
}

#[component]
pub fn MensajesPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_mensajes", "ver_mensajes"]>
            <MensajesList />
        </RequierePermiso>
    }
}

#[component]
fn MensajesList() -> impl IntoView {
    let sesion = use_sesion();
    let all_mensajes: RwSignal<Vec<Mensaje>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (solo_no_leidos, set_solo_no_leidos) = signal(false);
    let viewing: RwSignal<Option<Mensaje>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Mensaje>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| tiene_capacidad(&s.claves, &["gestionar_mensajes"], Combinador::Cualquiera))
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_mensajes().await {
                Ok(data) => {
                    all_mensajes.set(data);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los mensajes: {}", e)));
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
        let mut data = filter_list(all_mensajes.get(), &search.get());
        if solo_no_leidos.get() {
            data.retain(|m| !m.leido);
        }
        data.sort_by(|a, b| b.recibido_en.cmp(&a.recibido_en));
        data
    });

    let no_leidos = Memo::new(move |_| all_mensajes.get().iter().filter(|m| !m.leido).count());

    // Abrir un mensaje lo marca leído; si el PUT falla sólo queda el log.
    let abrir_mensaje = move |mensaje: Mensaje| {
        let id = mensaje.id;
        let era_no_leido = !mensaje.leido;
        viewing.set(Some(mensaje));
        if era_no_leido {
            spawn_local(async move {
                if let Err(e) = api::marcar_leido(id).await {
                    log::warn!("No se pudo marcar el mensaje {} como leído: {}", id, e);
                }
                all_mensajes.update(|data| {
                    if let Some(m) = data.iter_mut().find(|m| m.id == id) {
                        m.leido = true;
                    }
                });
            });
        }
    };

    let confirm_delete = move || {
        let Some(mensaje) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_mensaje(mensaje.id).await {
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
        <PageFrame page_id="mensajes--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Mensajes de contacto"</h1>
                    <Badge>
                        {move || no_leidos.get().to_string()}
                    </Badge>
                    <span class="page__subtitle">"sin leer"</span>
                </div>
                <div class="page__header-right">
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
                                    placeholder="Nombre, correo o asunto..."
                                />
                            </div>
                            <label class="filter-check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || solo_no_leidos.get()
                                    on:change=move |_| set_solo_no_leidos.update(|v| *v = !*v)
                                />
                                " Sólo sin leer"
                            </label>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=140.0>"Recibido"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Nombre"</TableHeaderCell>
                                <TableHeaderCell min_width=170.0>"Correo"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Asunto"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Estado"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visibles.get()
                                key=|m| m.id
                                children=move |mensaje| {
                                    let mensaje_for_view = mensaje.clone();
                                    let mensaje_for_delete = mensaje.clone();
                                    let recibido = formato_fecha_hora(&mensaje.recibido_en);
                                    let leido = mensaje.leido;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{recibido}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {if leido {
                                                        view! { <span>{mensaje.nombre.clone()}</span> }.into_any()
                                                    } else {
                                                        view! { <span style="font-weight: 600;">{mensaje.nombre.clone()}</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{mensaje.correo.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {mensaje.asunto.clone().unwrap_or_else(|| "(sin asunto)".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if leido {
                                                        view! { <span class="badge badge--neutral">"Leído"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--info">"Nuevo"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| abrir_mensaje(mensaje_for_view.clone())
                                                    attr:title="Leer"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let mensaje_for_delete = mensaje_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(mensaje_for_delete.clone()))
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

                {move || viewing.get().map(|mensaje| {
                    let recibido = formato_fecha_hora(&mensaje.recibido_en);
                    view! {
                        <div class="modal-overlay" on:click=move |_| viewing.set(None)>
                            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                                <div class="modal-header">
                                    <h2 class="modal-title">
                                        {mensaje.asunto.clone().unwrap_or_else(|| "(sin asunto)".to_string())}
                                    </h2>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| viewing.set(None)
                                    >
                                        {icon("x")}
                                    </Button>
                                </div>
                                <div class="modal-body">
                                    <div class="detail-row">
                                        <span class="detail-row__label">"De"</span>
                                        <span>{format!("{} <{}>", mensaje.nombre, mensaje.correo)}</span>
                                    </div>
                                    <div class="detail-row">
                                        <span class="detail-row__label">"Recibido"</span>
                                        <span>{recibido}</span>
                                    </div>
                                    <p class="mensaje-contenido">{mensaje.contenido.clone()}</p>
                                </div>
                                <div class="modal-footer">
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| viewing.set(None)
                                    >
                                        "Cerrar"
                                    </Button>
                                </div>
                            </div>
                        </div>
                    }
                })}

                {move || deleting.get().map(|mensaje| view! {
                    <ConfirmDialog
                        titulo="Eliminar mensaje".to_string()
                        mensaje=format!("¿Eliminar el mensaje de {}?", mensaje.correo)
                        on_confirm=move || confirm_delete()
                        on_cancel=move || deleting.set(None)
                        ocupado=Signal::derive(move || deleting_busy.get())
                    />
                })}
            </div>
        </PageFrame>
    }
}
