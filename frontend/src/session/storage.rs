//! Thin wrapper over the browser's localStorage. Every accessor degrades to
//! `None`/no-op when storage is unavailable (private windows, storage
//! disabled) instead of panicking the app.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        gloo_console::error!("localStorage no disponible");
        return;
    };
    if storage.set_item(key, value).is_err() {
        gloo_console::error!("No se pudo escribir en localStorage:", key);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
