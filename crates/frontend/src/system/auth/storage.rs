use web_sys::window;

const MARCADOR_SESION_KEY: &str = "sesion_correo";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Remember which account logged in last. Only a UI hint (login form
/// prefill); the cookie session is the actual credential.
pub fn guardar_marcador(correo: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(MARCADOR_SESION_KEY, correo);
    }
}

pub fn leer_marcador() -> Option<String> {
    get_local_storage()?.get_item(MARCADOR_SESION_KEY).ok()?
}

/// Discard the local marker after a failed session check or logout.
pub fn limpiar_marcador() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(MARCADOR_SESION_KEY);
    }
}
