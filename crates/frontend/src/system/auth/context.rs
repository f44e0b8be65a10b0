use std::collections::HashSet;

use contracts::system::auth::Identidad;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::api::{self, LookupError};
use super::storage;

/// Lifecycle of the session/role resolver. `Cargando` is the only transient
/// phase; every failure collapses into `Redirigida`, never into an error UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaseSesion {
    #[default]
    Cargando,
    Lista,
    Redirigida,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SesionState {
    pub fase: FaseSesion,
    pub identidad: Option<Identidad>,
    pub claves: HashSet<String>,
}

/// State after a successful session check, whatever the role lookup did.
/// A failed lookup degrades to the empty key set so the menu fails closed
/// instead of blocking the app on a transient error.
pub fn estado_tras_resolucion(
    identidad: Identidad,
    claves: Result<HashSet<String>, LookupError>,
) -> SesionState {
    let claves = match claves {
        Ok(claves) => claves,
        Err(err) => {
            log::error!("No se pudo consultar el rol de {}: {}", identidad.correo, err);
            HashSet::new()
        }
    };
    SesionState {
        fase: FaseSesion::Lista,
        identidad: Some(identidad),
        claves,
    }
}

/// State after a failed session check: no identity, no keys.
pub fn estado_sesion_invalida() -> SesionState {
    SesionState {
        fase: FaseSesion::Redirigida,
        ..SesionState::default()
    }
}

/// Resolver provider. Mounted once at the application root, under the router.
///
/// Runs the two-step chain (session check, then role lookup for that id)
/// exactly once per mount and publishes the result through context. Writes go
/// through `try_set` so a response that lands after teardown is discarded.
#[component]
pub fn SesionProvider(children: ChildrenFn) -> impl IntoView {
    let sesion = RwSignal::new(SesionState::default());
    let navigate = use_navigate();

    spawn_local(async move {
        match api::obtener_sesion().await {
            Ok(identidad) => {
                let claves = api::permisos_de_usuario(identidad.id).await;
                if sesion
                    .try_set(estado_tras_resolucion(identidad, claves))
                    .is_some()
                {
                    log::debug!("Resolución de sesión descartada tras desmontaje");
                }
            }
            Err(err) => {
                log::warn!("Sesión inválida: {}", err);
                storage::limpiar_marcador();
                let _ = sesion.try_set(estado_sesion_invalida());
            }
        }
    });

    // Any path into Redirigida (failed check, logout) lands on /login with
    // history replaced, so Back cannot return to a gated page.
    Effect::new(move |_| {
        if sesion.with(|s| s.fase == FaseSesion::Redirigida) {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    provide_context(sesion);

    children()
}

/// Hook to access the resolved session state. Descendants read, never write;
/// the only writers are the resolver itself, login and logout.
pub fn use_sesion() -> RwSignal<SesionState> {
    use_context::<RwSignal<SesionState>>().expect("SesionProvider not found in component tree")
}

/// Re-enter the resolved state after an interactive login. The caller grabs
/// the signal with [`use_sesion`] in component scope and hands it in; context
/// is not available across await points.
pub async fn iniciar_sesion(sesion: RwSignal<SesionState>, identidad: Identidad) {
    storage::guardar_marcador(&identidad.correo);
    let claves = api::permisos_de_usuario(identidad.id).await;
    let _ = sesion.try_set(estado_tras_resolucion(identidad, claves));
}

/// Invalidate the server session and fall back to the login page.
pub async fn cerrar_sesion(sesion: RwSignal<SesionState>) {
    if let Err(err) = api::logout().await {
        log::warn!("Logout falló, se descarta la sesión local igualmente: {}", err);
    }
    storage::limpiar_marcador();
    let _ = sesion.try_set(estado_sesion_invalida());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identidad() -> Identidad {
        Identidad {
            id: 7,
            correo: "gerente@barberia.mx".to_string(),
        }
    }

    fn claves(lista: &[&str]) -> HashSet<String> {
        lista.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn resolucion_exitosa_queda_lista() {
        let estado = estado_tras_resolucion(identidad(), Ok(claves(&["ver_citas"])));
        assert_eq!(estado.fase, FaseSesion::Lista);
        assert_eq!(estado.identidad.unwrap().id, 7);
        assert!(estado.claves.contains("ver_citas"));
    }

    #[test]
    fn consulta_de_rol_fallida_degrada_a_conjunto_vacio() {
        // Propiedad: el resolver nunca se queda en Cargando por un fallo
        // del lookup; cierra con cero permisos.
        let estado = estado_tras_resolucion(
            identidad(),
            Err(LookupError::Rechazada(503)),
        );
        assert_eq!(estado.fase, FaseSesion::Lista);
        assert!(estado.claves.is_empty());
        assert!(estado.identidad.is_some());
    }

    #[test]
    fn sesion_invalida_redirige_sin_claves() {
        let estado = estado_sesion_invalida();
        assert_eq!(estado.fase, FaseSesion::Redirigida);
        assert!(estado.claves.is_empty());
        assert!(estado.identidad.is_none());
    }

    #[test]
    fn escritura_tras_desmontaje_se_descarta() {
        let sesion = RwSignal::new(SesionState::default());
        assert!(sesion.try_set(estado_sesion_invalida()).is_none());

        sesion.dispose();
        // La respuesta tardía rebota sin panic ni mutación.
        let rebotada = sesion.try_set(estado_tras_resolucion(identidad(), Ok(claves(&[]))));
        assert!(rebotada.is_some());
    }
}
