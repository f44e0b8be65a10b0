use contracts::domain::roles::Rol;
use contracts::domain::usuarios::{CreateUsuarioDto, UpdateUsuarioDto, Usuario};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::roles::api as roles_api;
use crate::domain::usuarios::api;
use crate::shared::icons::icon;

/// Shared role <select> for both forms. Loads the catalog once on mount.
#[component]
fn SelectorRol(
    roles: RwSignal<Vec<Rol>>,
    rol_id: RwSignal<Option<i64>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            disabled=move || disabled.get()
            on:change=move |ev| {
                let val = event_target_value(&ev);
                rol_id.set(val.parse::<i64>().ok());
            }
            prop:value=move || {
                rol_id.get().map(|id| id.to_string()).unwrap_or_default()
            }
        >
            <option value="">"Sin rol"</option>
            {move || roles.get().into_iter().map(|rol| {
                let id = rol.id.to_string();
                view! {
                    <option value=id.clone() selected=move || rol_id.get() == Some(rol.id)>
                        {rol.nombre.clone()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

fn cargar_roles(roles: RwSignal<Vec<Rol>>) {
    spawn_local(async move {
        match roles_api::fetch_roles().await {
            Ok(data) => roles.set(data),
            Err(e) => log::error!("No se pudo cargar el catálogo de roles: {}", e),
        }
    });
}

#[component]
pub fn CreateUsuarioForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let nombre = RwSignal::new(String::new());
    let correo = RwSignal::new(String::new());
    let contrasena = RwSignal::new(String::new());
    let rol_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let roles: RwSignal<Vec<Rol>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    cargar_roles(roles);

    let on_save = move |_| {
        if nombre.get_untracked().trim().is_empty() || correo.get_untracked().trim().is_empty() {
            set_error.set(Some("Nombre y correo son obligatorios".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let dto = CreateUsuarioDto {
            nombre: nombre.get_untracked().trim().to_string(),
            correo: correo.get_untracked().trim().to_string(),
            contrasena: contrasena.get_untracked(),
            rol_id: rol_id.get_untracked(),
        };

        spawn_local(async move {
            match api::create_usuario(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Error al crear: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Nuevo usuario"</h2>
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
                        <Label>"Nombre"</Label>
                        <Input
                            value=nombre
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Correo"</Label>
                        <Input
                            value=correo
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Contraseña"</Label>
                        <Input
                            value=contrasena
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Rol"</Label>
                        <SelectorRol
                            roles=roles
                            rol_id=rol_id
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

#[component]
pub fn EditUsuarioForm<F1, F2>(usuario: Usuario, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let nombre = RwSignal::new(usuario.nombre.clone());
    let correo = RwSignal::new(usuario.correo.clone());
    let rol_id: RwSignal<Option<i64>> = RwSignal::new(usuario.rol_id);
    let activo = RwSignal::new(usuario.activo);
    let roles: RwSignal<Vec<Rol>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    cargar_roles(roles);

    let correo_display = usuario.correo.clone();

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let dto = UpdateUsuarioDto {
            id: usuario.id,
            nombre: nombre.get_untracked().trim().to_string(),
            correo: correo.get_untracked().trim().to_string(),
            rol_id: rol_id.get_untracked(),
            activo: activo.get_untracked(),
        };

        spawn_local(async move {
            match api::update_usuario(dto).await {
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
                    <h2 class="modal-title">{format!("Edición: {}", correo_display)}</h2>
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
                        <Label>"Nombre"</Label>
                        <Input
                            value=nombre
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Correo"</Label>
                        <Input
                            value=correo
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Rol"</Label>
                        <SelectorRol
                            roles=roles
                            rol_id=rol_id
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Checkbox checked=activo label="Activo" />
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
