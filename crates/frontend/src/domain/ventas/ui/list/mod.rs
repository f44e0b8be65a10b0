use contracts::domain::personal::Empleado;
use contracts::domain::ventas::{CreateVentaDto, LineaVenta, Venta};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::personal::api as personal_api;
use crate::domain::ventas::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{formato_fecha_hora, formato_moneda};
use crate::shared::export::{exportar_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

impl CsvExportable for Venta {
    fn headers() -> Vec<&'static str> {
        vec!["Folio", "Cliente", "Barbero", "Método de pago", "Total", "Fecha"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.folio.clone(),
            self.cliente.clone().unwrap_or_default(),
            self.empleado_nombre.clone().unwrap_or_default(),
            self.metodo_pago.clone(),
            format!("{:.2}", self.total),
            self.fecha.clone(),
        ]
    }
}

#[component]
pub fn VentasPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_ventas", "ver_ventas"]>
            <VentasList />
        </RequierePermiso>
    }
}

#[component]
fn VentasList() -> impl IntoView {
    let sesion = use_sesion();
    let items: RwSignal<Vec<Venta>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);
    let (total_count, set_total_count) = signal(0usize);
    let search_signal = RwSignal::new(String::new());
    let (applied_query, set_applied_query) = signal(String::new());
    let (show_create_form, set_show_create_form) = signal(false);
    let viewing: RwSignal<Option<Venta>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Venta>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| tiene_capacidad(&s.claves, &["gestionar_ventas"], Combinador::Cualquiera))
    };

    // Paginación en servidor: cada cambio de página/tamaño/filtro re-consulta.
    Effect::new(move |_| {
        let page_val = page.get();
        let size_val = page_size.get();
        let query_val = applied_query.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_ventas(page_val, size_val, &query_val).await {
                Ok(result) => {
                    items.set(result.data);
                    set_total_count.set(result.total);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar las ventas: {}", e)));
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

    let reload = move || {
        // Re-dispara el efecto de carga sin mover la página
        set_applied_query.set(search_signal.get_untracked());
    };

    let apply_search = move || {
        set_page.set(0);
        set_applied_query.set(search_signal.get_untracked());
    };

    let on_export = move |_| {
        let data = items.get_untracked();
        if let Err(e) = exportar_csv(&data, "ventas.csv") {
            set_error.set(Some(e));
        }
    };

    let confirm_delete = move || {
        let Some(venta) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_venta(venta.id).await {
                Ok(_) => {
                    deleting.set(None);
                    set_deleting_busy.set(false);
                    reload();
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudo eliminar: {}", e)));
                    deleting.set(None);
                    set_deleting_busy.set(false);
                }
            }
        });
    };

    let ver_detalle = move |id: i64| {
        spawn_local(async move {
            match api::fetch_venta(id).await {
                Ok(venta) => viewing.set(Some(venta)),
                Err(e) => set_error.set(Some(format!("No se pudo cargar la venta: {}", e))),
            }
        });
    };

    view! {
        <PageFrame page_id="ventas--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Ventas"</h1>
                    <Badge>
                        {move || total_count.get().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Show when=puede_gestionar>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| set_show_create_form.set(true)
                        >
                            {icon("plus")}
                            " Nueva venta"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_export
                    >
                        {icon("download")}
                        " Exportar CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
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
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=search_signal
                                    placeholder="Folio o cliente..."
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
                                    set_page.set(0);
                                    set_applied_query.set(String::new());
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
                                <TableHeaderCell min_width=110.0>"Folio"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Cliente"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Barbero"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Pago"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Total"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Fecha"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|v| v.id
                                children=move |venta| {
                                    let venta_id = venta.id;
                                    let venta_for_delete = venta.clone();
                                    let total = formato_moneda(venta.total);
                                    let fecha = formato_fecha_hora(&venta.fecha);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{venta.folio.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {venta.cliente.clone().unwrap_or_else(|| "Mostrador".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {venta.empleado_nombre.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{venta.metodo_pago.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{fecha}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| ver_detalle(venta_id)
                                                    attr:title="Ver detalle"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let venta_for_delete = venta_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(venta_for_delete.clone()))
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
                        <CreateVentaForm
                            on_close=move || set_show_create_form.set(false)
                            on_created=move || {
                                set_show_create_form.set(false);
                                reload();
                            }
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || viewing.get().map(|venta| view! {
                    <DetalleVentaModal
                        venta=venta
                        on_close=move || viewing.set(None)
                    />
                })}

                {move || deleting.get().map(|venta| view! {
                    <ConfirmDialog
                        titulo="Eliminar venta".to_string()
                        mensaje=format!("¿Eliminar la venta {}?", venta.folio)
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
fn DetalleVentaModal<F>(venta: Venta, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let total = formato_moneda(venta.total);
    let fecha = formato_fecha_hora(&venta.fecha);
    let lineas = venta.lineas.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{format!("Venta {}", venta.folio)}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="detail-row">
                        <span class="detail-row__label">"Cliente"</span>
                        <span>{venta.cliente.clone().unwrap_or_else(|| "Mostrador".to_string())}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Barbero"</span>
                        <span>{venta.empleado_nombre.clone().unwrap_or_default()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Método de pago"</span>
                        <span>{venta.metodo_pago.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Fecha"</span>
                        <span>{fecha}</span>
                    </div>

                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Concepto"</TableHeaderCell>
                                <TableHeaderCell>"Cantidad"</TableHeaderCell>
                                <TableHeaderCell>"Precio"</TableHeaderCell>
                                <TableHeaderCell>"Importe"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {lineas.into_iter().map(|linea| {
                                let importe = formato_moneda(linea.precio_unitario * linea.cantidad as f64);
                                let precio = formato_moneda(linea.precio_unitario);
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true>{linea.descripcion.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{linea.cantidad.to_string()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{precio}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{importe}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>

                    <div class="detail-row detail-row--total">
                        <span class="detail-row__label">"Total"</span>
                        <span style="font-weight: 600;">{total}</span>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                    >
                        "Cerrar"
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CreateVentaForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let cliente = RwSignal::new(String::new());
    let empleado_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let metodo_pago = RwSignal::new("Efectivo".to_string());
    // (descripcion, cantidad, precio) como texto hasta validar
    let lineas: RwSignal<Vec<(RwSignal<String>, RwSignal<String>, RwSignal<String>)>> =
        RwSignal::new(vec![(
            RwSignal::new(String::new()),
            RwSignal::new("1".to_string()),
            RwSignal::new(String::new()),
        )]);
    let empleados: RwSignal<Vec<Empleado>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match personal_api::fetch_personal().await {
            Ok(data) => empleados.set(data.into_iter().filter(|e| e.activo).collect()),
            Err(e) => log::error!("No se pudo cargar la plantilla: {}", e),
        }
    });

    let agregar_linea = move |_| {
        lineas.update(|l| {
            l.push((
                RwSignal::new(String::new()),
                RwSignal::new("1".to_string()),
                RwSignal::new(String::new()),
            ));
        });
    };

    let on_save = move |_| {
        let mut lineas_val = Vec::new();
        for (descripcion, cantidad, precio) in lineas.get_untracked() {
            let desc = descripcion.get_untracked().trim().to_string();
            if desc.is_empty() {
                continue;
            }
            let Ok(cant) = cantidad.get_untracked().trim().parse::<u32>() else {
                set_error.set(Some(format!("Cantidad inválida en \"{}\"", desc)));
                return;
            };
            let Ok(precio_val) = precio.get_untracked().replace(',', ".").parse::<f64>() else {
                set_error.set(Some(format!("Precio inválido en \"{}\"", desc)));
                return;
            };
            lineas_val.push(LineaVenta {
                descripcion: desc,
                cantidad: cant,
                precio_unitario: precio_val,
            });
        }
        if lineas_val.is_empty() {
            set_error.set(Some("Agrega al menos una línea".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let dto = CreateVentaDto {
            cliente: {
                let c = cliente.get_untracked().trim().to_string();
                if c.is_empty() { None } else { Some(c) }
            },
            empleado_id: empleado_id.get_untracked(),
            metodo_pago: metodo_pago.get_untracked(),
            lineas: lineas_val,
        };

        spawn_local(async move {
            match api::create_venta(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Error al registrar: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Nueva venta"</h2>
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
                            placeholder="Mostrador"
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Barbero"</Label>
                        <select
                            class="form__select"
                            disabled=move || saving.get()
                            on:change=move |ev| {
                                empleado_id.set(event_target_value(&ev).parse::<i64>().ok());
                            }
                        >
                            <option value="">"Sin asignar"</option>
                            {move || empleados.get().into_iter().map(|e| {
                                let id = e.id.to_string();
                                view! { <option value=id>{e.nombre.clone()}</option> }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Método de pago"</Label>
                        <select
                            class="form__select"
                            disabled=move || saving.get()
                            on:change=move |ev| metodo_pago.set(event_target_value(&ev))
                            prop:value=move || metodo_pago.get()
                        >
                            <option value="Efectivo">"Efectivo"</option>
                            <option value="Tarjeta">"Tarjeta"</option>
                            <option value="Transferencia">"Transferencia"</option>
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Líneas"</Label>
                        <For
                            each={move || lineas.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(i, _)| *i
                            children=move |(_, (descripcion, cantidad, precio))| {
                                view! {
                                    <Flex gap=FlexGap::Small>
                                        <div style="flex: 3;">
                                            <Input
                                                value=descripcion
                                                placeholder="Corte de caballero"
                                                disabled=Signal::derive(move || saving.get())
                                            />
                                        </div>
                                        <div style="flex: 1;">
                                            <Input
                                                value=cantidad
                                                disabled=Signal::derive(move || saving.get())
                                            />
                                        </div>
                                        <div style="flex: 1;">
                                            <Input
                                                value=precio
                                                placeholder="0.00"
                                                disabled=Signal::derive(move || saving.get())
                                            />
                                        </div>
                                    </Flex>
                                }
                            }
                        />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=agregar_linea
                        >
                            {icon("plus")}
                            " Agregar línea"
                        </Button>
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
                        {move || if saving.get() { "Registrando..." } else { "Registrar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
