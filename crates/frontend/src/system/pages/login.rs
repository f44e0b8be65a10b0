use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::system::auth::{api, context::iniciar_sesion, context::use_sesion, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    // Prefill with the last account that logged in on this browser
    let (correo, set_correo) = signal(storage::leer_marcador().unwrap_or_default());
    let (contrasena, set_contrasena) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let sesion = use_sesion();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let correo_val = correo.get();
        let contrasena_val = contrasena.get();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(correo_val, contrasena_val).await {
                Ok(identidad) => {
                    iniciar_sesion(sesion, identidad).await;
                    set_is_loading.set(false);
                    navigate(
                        "/",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(e) => {
                    set_error_message.set(Some(format!("No se pudo iniciar sesión: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Barbería Admin"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="correo">"Correo"</label>
                        <input
                            type="email"
                            id="correo"
                            placeholder="correo@ejemplo.com"
                            value=move || correo.get()
                            on:input=move |ev| set_correo.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="contrasena">"Contraseña"</label>
                        <input
                            type="password"
                            id="contrasena"
                            value=move || contrasena.get()
                            on:input=move |ev| set_contrasena.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
