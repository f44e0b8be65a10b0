use contracts::dashboards::d100_resumen::ResumenResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d101_reportes::api;
use crate::shared::date_utils::formato_moneda;
use crate::shared::export::descargar_pdf;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::guard::RequierePermiso;

#[component]
pub fn ReportesPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["ver_reportes"]>
            <Reportes />
        </RequierePermiso>
    }
}

#[component]
fn Reportes() -> impl IntoView {
    let (meses, set_meses) = signal(6u32);
    let (data, set_data) = signal(None::<ResumenResponse>);
    let (loading, set_loading) = signal(false);
    let (descargando, set_descargando) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Re-consulta al cambiar el periodo
    Effect::new(move |_| {
        let meses_val = meses.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_resumen(meses_val).await {
                Ok(resumen) => {
                    set_data.set(Some(resumen));
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let on_descargar = move |_| {
        let meses_val = meses.get_untracked();
        set_descargando.set(true);
        spawn_local(async move {
            match api::descargar_reporte(meses_val).await {
                Ok(bytes) => {
                    let nombre = format!("reporte_{}m.pdf", meses_val);
                    if let Err(e) = descargar_pdf(&bytes, &nombre) {
                        set_error.set(Some(e));
                    }
                }
                Err(e) => set_error.set(Some(format!("No se pudo descargar el reporte: {}", e))),
            }
            set_descargando.set(false);
        });
    };

    view! {
        <PageFrame page_id="reportes--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Reportes"</h1>
                </div>
                <div class="page__header-right">
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                set_meses.set(v);
                            }
                        }
                        prop:value=move || meses.get().to_string()
                    >
                        <option value="3">"Últimos 3 meses"</option>
                        <option value="6">"Últimos 6 meses"</option>
                        <option value="12">"Últimos 12 meses"</option>
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_descargar
                        disabled=Signal::derive(move || descargando.get() || loading.get())
                    >
                        {icon("download")}
                        {move || if descargando.get() { " Generando..." } else { " Descargar PDF" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || data.get().map(|d| {
                    let total_ingresos: f64 = d.por_mes.iter().map(|p| p.ingresos).sum();
                    let total_gastos: f64 = d.por_mes.iter().map(|p| p.gastos).sum();
                    let filas = d.por_mes.clone();
                    view! {
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=110.0>"Mes"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Ingresos"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Gastos"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Balance"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {filas.into_iter().map(|punto| {
                                        let balance = punto.ingresos - punto.gastos;
                                        let clase_balance = if balance < 0.0 {
                                            "reporte__balance reporte__balance--negativo"
                                        } else {
                                            "reporte__balance"
                                        };
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{punto.mes.clone()}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{formato_moneda(punto.ingresos)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{formato_moneda(punto.gastos)}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class=clase_balance>{formato_moneda(balance)}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 600;">"Total"</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 600;">{formato_moneda(total_ingresos)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 600;">{formato_moneda(total_gastos)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 600;">{formato_moneda(total_ingresos - total_gastos)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                </TableBody>
                            </Table>
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}
