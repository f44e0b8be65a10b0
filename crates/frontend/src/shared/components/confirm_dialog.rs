use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Confirmation modal used before destructive actions (deletes).
#[component]
pub fn ConfirmDialog<F1, F2>(
    titulo: String,
    mensaje: String,
    on_confirm: F1,
    on_cancel: F2,
    /// Disable the buttons while the request is in flight
    #[prop(into, optional)]
    ocupado: Signal<bool>,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel()>
            <div class="modal modal--confirm" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{titulo}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_cancel()
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <p>{mensaje}</p>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel()
                        disabled=Signal::derive(move || ocupado.get())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm()
                        disabled=Signal::derive(move || ocupado.get())
                    >
                        {move || if ocupado.get() { "Eliminando..." } else { "Eliminar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
