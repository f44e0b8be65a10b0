use chrono::{Datelike, Utc};
use contracts::dashboards::d100_resumen::{PuntoMensual, ResumenResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_resumen::api;
use crate::shared::components::stat_card::{FormatoValor, StatCard};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

const MESES_GRAFICA: u32 = 6;

/// Ingreso/gasto mensual como barras SVG. El alto se normaliza contra el
/// máximo del periodo; los colores los pone el CSS.
#[component]
fn GraficaMensual(datos: Vec<PuntoMensual>) -> impl IntoView {
    let maximo = datos
        .iter()
        .flat_map(|p| [p.ingresos, p.gastos])
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let ancho_grupo = 64usize;
    let alto = 180.0_f64;
    let ancho_total = datos.len() * ancho_grupo;

    view! {
        <div class="chart-wrapper">
            <svg
                class="chart chart--mensual"
                viewBox=format!("0 0 {} {}", ancho_total, alto as usize + 24)
                role="img"
                aria-label="Ingresos y gastos por mes"
            >
                {datos.iter().enumerate().map(|(i, punto)| {
                    let x0 = i * ancho_grupo;
                    let h_ingresos = alto * punto.ingresos / maximo;
                    let h_gastos = alto * punto.gastos / maximo;
                    let etiqueta = punto.mes.get(5..).unwrap_or(&punto.mes).to_string();
                    view! {
                        <g>
                            <rect
                                class="chart__bar chart__bar--ingresos"
                                x=(x0 + 10).to_string()
                                y=(alto - h_ingresos).to_string()
                                width="20"
                                height=h_ingresos.max(1.0).to_string()
                            >
                                <title>{format!("{}: ingresos {:.2}", punto.mes, punto.ingresos)}</title>
                            </rect>
                            <rect
                                class="chart__bar chart__bar--gastos"
                                x=(x0 + 34).to_string()
                                y=(alto - h_gastos).to_string()
                                width="20"
                                height=h_gastos.max(1.0).to_string()
                            >
                                <title>{format!("{}: gastos {:.2}", punto.mes, punto.gastos)}</title>
                            </rect>
                            <text
                                class="chart__label"
                                x=(x0 + ancho_grupo / 2).to_string()
                                y=(alto + 16.0).to_string()
                                text-anchor="middle"
                            >
                                {etiqueta}
                            </text>
                        </g>
                    }
                }).collect_view()}
            </svg>
            <div class="chart-legend">
                <span class="chart-legend__item chart-legend__item--ingresos">"Ingresos"</span>
                <span class="chart-legend__item chart-legend__item--gastos">"Gastos"</span>
            </div>
        </div>
    }
}

#[component]
pub fn InicioDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<ResumenResponse>);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::get_resumen(MESES_GRAFICA).await {
            Ok(resumen) => set_data.set(Some(resumen)),
            Err(e) => {
                log::error!("No se pudo cargar el resumen: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    let ventas_mes = Signal::derive(move || data.get().map(|d| d.ventas_mes));
    let citas_hoy = Signal::derive(move || data.get().map(|d| d.citas_hoy as f64));
    let gastos_mes = Signal::derive(move || data.get().map(|d| d.gastos_mes));
    let comisiones = Signal::derive(move || data.get().map(|d| d.comisiones_pendientes));

    let cambio_ventas = Signal::derive(move || {
        data.get().and_then(|d| {
            if d.ventas_mes_anterior > 0.0 {
                Some((d.ventas_mes - d.ventas_mes_anterior) / d.ventas_mes_anterior * 100.0)
            } else {
                None
            }
        })
    });

    view! {
        <PageFrame page_id="inicio--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inicio"</h1>
                    <span class="page__subtitle">
                        {
                            let hoy = Utc::now().date_naive();
                            format!("Corte al {:02}/{:02}/{}", hoy.day(), hoy.month(), hoy.year())
                        }
                    </span>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">
                        {format!("No se pudo cargar el resumen: {}", e)}
                    </div>
                })}

                <div class="stat-row">
                    <StatCard
                        label="Ventas del mes"
                        icon_name="cash"
                        valor=ventas_mes
                        formato=FormatoValor::Moneda
                        cambio=cambio_ventas
                    />
                    <StatCard
                        label="Citas de hoy"
                        icon_name="calendar"
                        valor=citas_hoy
                        formato=FormatoValor::Entero
                    />
                    <StatCard
                        label="Gastos del mes"
                        icon_name="receipt"
                        valor=gastos_mes
                        formato=FormatoValor::Moneda
                    />
                    <StatCard
                        label="Comisiones pendientes"
                        icon_name="percent"
                        valor=comisiones
                        formato=FormatoValor::Moneda
                    />
                </div>

                {move || data.get().map(|d| view! {
                    <div class="panel">
                        <h2 class="panel__title">"Ingresos y gastos"</h2>
                        <GraficaMensual datos=d.por_mes.clone() />
                    </div>
                })}
            </div>
        </PageFrame>
    }
}
