use contracts::domain::gastos::{CreateGastoDto, Gasto, UpdateGastoDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::gastos::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils::{formato_fecha, formato_moneda};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::capability::{tiene_capacidad, Combinador};
use crate::system::auth::context::use_sesion;
use crate::system::auth::guard::RequierePermiso;

const CATEGORIAS: &[&str] = &[
    "Renta",
    "Servicios",
    "Insumos",
    "Nómina",
    "Mantenimiento",
    "Otros",
];

#[component]
pub fn GastosPage() -> impl IntoView {
    view! {
        <RequierePermiso claves=&["gestionar_gastos", "ver_gastos"]>
            <GastosList />
        </RequierePermiso>
    }
}

#[component]
fn GastosList() -> impl IntoView {
    let sesion = use_sesion();
    let all_gastos: RwSignal<Vec<Gasto>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (categoria_filtro, set_categoria_filtro) = signal(String::new());
    let editor: RwSignal<Option<Option<Gasto>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Gasto>> = RwSignal::new(None);
    let (deleting_busy, set_deleting_busy) = signal(false);

    let puede_gestionar = move || {
        sesion.with(|s| tiene_capacidad(&s.claves, &["gestionar_gastos"], Combinador::Cualquiera))
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_gastos().await {
                Ok(data) => {
                    all_gastos.set(data);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los gastos: {}", e)));
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
        let categoria = categoria_filtro.get();
        let mut data = all_gastos.get();
        if !categoria.is_empty() {
            data.retain(|g| g.categoria == categoria);
        }
        if !query.is_empty() {
            data.retain(|g| g.concepto.to_lowercase().contains(&query));
        }
        // Más recientes primero
        data.sort_by(|a, b| b.fecha.cmp(&a.fecha));
        data
    });

    let total_filtrado = Memo::new(move |_| visibles.get().iter().map(|g| g.monto).sum::<f64>());

    let confirm_delete = move || {
        let Some(gasto) = deleting.get_untracked() else {
            return;
        };
        set_deleting_busy.set(true);
        spawn_local(async move {
            match api::delete_gasto(gasto.id).await {
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
        <PageFrame page_id="gastos--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gastos"</h1>
                    <Badge>
                        {move || visibles.get().len().to_string()}
                    </Badge>
                    <span class="page__subtitle">
                        {move || format!("Total filtrado: {}", formato_moneda(total_filtrado.get()))}
                    </span>
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
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="max-width: 280px;">
                                <Input
                                    value=search
                                    placeholder="Concepto..."
                                />
                            </div>
                            <select
                                class="form__select"
                                on:change=move |ev| set_categoria_filtro.set(event_target_value(&ev))
                                prop:value=move || categoria_filtro.get()
                            >
                                <option value="">"Todas las categorías"</option>
                                {CATEGORIAS.iter().map(|c| {
                                    view! { <option value=*c>{*c}</option> }
                                }).collect_view()}
                            </select>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=200.0>"Concepto"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Categoría"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Monto"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Fecha"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Registrado por"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visibles.get()
                                key=|g| g.id
                                children=move |gasto| {
                                    let gasto_for_edit = gasto.clone();
                                    let gasto_for_delete = gasto.clone();
                                    let monto = formato_moneda(gasto.monto);
                                    let fecha = formato_fecha(&gasto.fecha);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{gasto.concepto.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{gasto.categoria.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{monto}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{fecha}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {gasto.registrado_por.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=puede_gestionar>
                                                    {
                                                        let gasto_for_edit = gasto_for_edit.clone();
                                                        let gasto_for_delete = gasto_for_delete.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editor.set(Some(Some(gasto_for_edit.clone())))
                                                                attr:title="Editar"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deleting.set(Some(gasto_for_delete.clone()))
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

                {move || editor.get().map(|gasto| view! {
                    <EditorGastoForm
                        gasto=gasto
                        on_close=move || editor.set(None)
                        on_saved=move || {
                            editor.set(None);
                            load_data();
                        }
                    />
                })}

                {move || deleting.get().map(|gasto| view! {
                    <ConfirmDialog
                        titulo="Eliminar gasto".to_string()
                        mensaje=format!("¿Eliminar el gasto \"{}\"?", gasto.concepto)
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
fn EditorGastoForm<F1, F2>(
    /// None = gasto nuevo
    gasto: Option<Gasto>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let gasto_id = gasto.as_ref().map(|g| g.id);
    let concepto = RwSignal::new(gasto.as_ref().map(|g| g.concepto.clone()).unwrap_or_default());
    let categoria = RwSignal::new(
        gasto
            .as_ref()
            .map(|g| g.categoria.clone())
            .unwrap_or_else(|| "Otros".to_string()),
    );
    let monto = RwSignal::new(
        gasto
            .as_ref()
            .map(|g| format!("{:.2}", g.monto))
            .unwrap_or_default(),
    );
    let fecha = RwSignal::new(
        gasto
            .as_ref()
            .map(|g| g.fecha.split('T').next().unwrap_or(&g.fecha).to_string())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let titulo = if gasto_id.is_none() {
        "Nuevo gasto"
    } else {
        "Edición de gasto"
    };

    let on_save = move |_| {
        let concepto_val = concepto.get_untracked().trim().to_string();
        if concepto_val.is_empty() {
            set_error.set(Some("El concepto es obligatorio".to_string()));
            return;
        }
        let Ok(monto_val) = monto.get_untracked().replace(',', ".").parse::<f64>() else {
            set_error.set(Some("Monto inválido".to_string()));
            return;
        };
        let fecha_val = fecha.get_untracked().trim().to_string();
        if fecha_val.is_empty() {
            set_error.set(Some("La fecha es obligatoria".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let categoria_val = categoria.get_untracked();

        spawn_local(async move {
            let result = match gasto_id {
                None => api::create_gasto(CreateGastoDto {
                    concepto: concepto_val,
                    categoria: categoria_val,
                    monto: monto_val,
                    fecha: fecha_val,
                })
                .await
                .map(|_| ()),
                Some(id) => {
                    api::update_gasto(UpdateGastoDto {
                        id,
                        concepto: concepto_val,
                        categoria: categoria_val,
                        monto: monto_val,
                        fecha: fecha_val,
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
                        <Label>"Concepto"</Label>
                        <Input
                            value=concepto
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Categoría"</Label>
                        <select
                            class="form__select"
                            disabled=move || saving.get()
                            on:change=move |ev| categoria.set(event_target_value(&ev))
                            prop:value=move || categoria.get()
                        >
                            {CATEGORIAS.iter().map(|c| {
                                view! {
                                    <option value=*c selected=move || categoria.get() == *c>{*c}</option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Monto"</Label>
                        <Input
                            value=monto
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Fecha"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || fecha.get()
                            on:input=move |ev| fecha.set(event_target_value(&ev))
                            disabled=move || saving.get()
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
