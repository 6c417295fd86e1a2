use common::model::report::ReportStatus;
use yew::{html, Html};

/// Status pill for report listings.
pub fn status_badge(status: ReportStatus) -> Html {
    let color = match status {
        ReportStatus::Cancelada => "#ef4444",
        ReportStatus::Pendiente => "#eab308",
        ReportStatus::Resuelto => "#22c55e",
        ReportStatus::Desconocido => "#6b7280",
    };
    html! {
        <span class="badge" style={format!("background:{color};")}>
            { status.to_string() }
        </span>
    }
}

/// Activo/Inactivo marker for soft-deleted collections.
pub fn active_badge(active: bool) -> Html {
    if active {
        html! { <span class="state-active">{ "Activo" }</span> }
    } else {
        html! { <span class="state-inactive">{ "Inactivo" }</span> }
    }
}
