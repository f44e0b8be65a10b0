use contracts::domain::auditoria::EventoAuditoria;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::auditoria::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::formato_fecha_hora;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::guard::RequierePermiso;

/// Texto plano del payload JSON: las cadenas van sin comillas, el resto
/// se muestra serializado.
fn detalle_legible(detalle: &Option<serde_json::Value>) -> String {
    match detalle {
        None => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

#[component]
pub fn AuditoriaPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["ver_auditoria"]>
            <AuditoriaList />
        </RequierePermiso>
    }
}

#[component]
fn AuditoriaList() -> impl IntoView {
    let items: RwSignal<Vec<EventoAuditoria>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(50usize);
    let (total_count, set_total_count) = signal(0usize);
    let (applied_query, set_applied_query) = signal(String::new());
    let input_value = RwSignal::new(String::new());
    // Generación del debounce: sólo la última edición dispara la búsqueda
    let debounce_gen = StoredValue::new(0u32);

    Effect::new(move |_| {
        let page_val = page.get();
        let size_val = page_size.get();
        let query_val = applied_query.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_eventos(page_val, size_val, &query_val).await {
                Ok(result) => {
                    items.set(result.data);
                    set_total_count.set(result.total);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudo cargar la bitácora: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    });

    let total_pages = Memo::new(move |_| {
        let count = total_count.get();
        if count == 0 {
            1
        } else {
            (count + page_size.get() - 1) / page_size.get()
        }
    });

    let on_search_input = move |valor: String| {
        input_value.set(valor.clone());
        let gen = debounce_gen.get_value() + 1;
        debounce_gen.set_value(gen);
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            if debounce_gen.get_value() == gen {
                set_page.set(0);
                set_applied_query.set(valor);
            }
        });
    };

    view! {
        <PageFrame page_id="auditoria--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Auditoría"</h1>
                    <Badge>
                        {move || total_count.get().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_applied_query.set(input_value.get_untracked())
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
                                page_size_options=vec![50, 100, 200]
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <div style="max-width: 320px;">
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Usuario, acción o entidad..."
                                prop:value=move || input_value.get()
                                on:input=move |ev| on_search_input(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=140.0>"Fecha"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Usuario"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Acción"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Entidad"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Detalle"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|e| e.id
                                children=move |evento| {
                                    let fecha = formato_fecha_hora(&evento.fecha);
                                    let detalle = detalle_legible(&evento.detalle);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{fecha}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {evento.usuario_correo.clone().unwrap_or_else(|| "sistema".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{evento.accion.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{evento.entidad.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {detalle}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
