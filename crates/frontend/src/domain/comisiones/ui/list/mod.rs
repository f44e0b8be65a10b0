use contracts::domain::comisiones::{Comision, MarcarComisionPagadaDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::comisiones::api;
use crate::shared::date_utils::{formato_fecha, formato_moneda};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

#[component]
pub fn ComisionesPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_comisiones", "ver_comisiones"]>
            <ComisionesList />
        </RequierePermiso>
    }
}

#[component]
fn ComisionesList() -> impl IntoView {
    let sesion = use_sesion();
    let all_comisiones: RwSignal<Vec<Comision>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (solo_pendientes, set_solo_pendientes) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| {
            tiene_capacidad(&s.claves, &["gestionar_comisiones"], Combinador::Cualquiera)
        })
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_comisiones().await {
                Ok(data) => {
                    all_comisiones.set(data);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar las comisiones: {}", e)));
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
        let pendientes = solo_pendientes.get();
        let mut data = all_comisiones.get();
        if pendientes {
            data.retain(|c| !c.pagada);
        }
        if !query.is_empty() {
            data.retain(|c| {
                c.empleado_nombre
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&query)
                    || c.venta_folio
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }
        data.sort_by(|a, b| b.fecha.cmp(&a.fecha));
        data
    });

    let total_pendiente = Memo::new(move |_| {
        visibles
            .get()
            .iter()
            .filter(|c| !c.pagada)
            .map(|c| c.monto)
            .sum::<f64>()
    });

    let toggle_pagada = move |comision: Comision| {
        let dto = MarcarComisionPagadaDto {
            id: comision.id,
            pagada: !comision.pagada,
        };
        spawn_local(async move {
            match api::marcar_pagada(dto).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("No se pudo actualizar: {}", e))),
            }
        });
    };

    view! {
        <PageFrame page_id="comisiones--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Comisiones"</h1>
                    <Badge>
                        {move || visibles.get().len().to_string()}
                    </Badge>
                    <span class="page__subtitle">
                        {move || format!("Pendiente de pago: {}", formato_moneda(total_pendiente.get()))}
                    </span>
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
                                    placeholder="Barbero o folio..."
                                />
                            </div>
                            <label class="filter-check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || solo_pendientes.get()
                                    on:change=move |_| set_solo_pendientes.update(|v| *v = !*v)
                                />
                                " Sólo pendientes"
                            </label>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=150.0>"Barbero"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Venta"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"%"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Monto"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Fecha"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Estado"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visibles.get()
                                key=|c| c.id
                                children=move |comision| {
                                    let comision_for_toggle = comision.clone();
                                    let monto = formato_moneda(comision.monto);
                                    let porcentaje = format!("{:.0}%", comision.porcentaje);
                                    let fecha = formato_fecha(&comision.fecha);
                                    let pagada = comision.pagada;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {comision.empleado_nombre.clone().unwrap_or_default()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {comision.venta_folio.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{porcentaje}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{monto}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{fecha}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if pagada {
                                                        view! { <span class="badge badge--success">"Pagada"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--warning">"Pendiente"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let comision_for_toggle = comision_for_toggle.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| toggle_pagada(comision_for_toggle.clone())
                                                            >
                                                                {icon("check")}
                                                                {if pagada { " Marcar pendiente" } else { " Marcar pagada" }}
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
            </div>
        </PageFrame>
    }
}
