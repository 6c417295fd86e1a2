use yew::{html, Html};

/// Full-screen overlay shown while a mutation is in flight. Occludes the
/// page so a request cannot be double-submitted; it does not cancel the
/// request underneath.
pub fn loading_overlay() -> Html {
    html! {
        <div class="loading-overlay">
            <div class="loading-card">{ "Cargando..." }</div>
        </div>
    }
}
