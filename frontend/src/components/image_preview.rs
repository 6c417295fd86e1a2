use yew::prelude::*;

/// Fullscreen overlay for an evidence image. Clicking anywhere closes it.
pub fn image_preview(url: &str, on_close: Callback<MouseEvent>) -> Html {
    html! {
        <div class="modal-overlay" onclick={on_close}>
            <img class="preview-image" src={url.to_string()} alt="Vista previa" />
        </div>
    }
}

/// 40x40 clickable thumbnails for a report's evidence list, or the
/// placeholder text when there is none.
pub fn evidence_thumbnails(
    images: &[common::model::report::ReportImage],
    on_preview: Callback<String>,
) -> Html {
    if images.is_empty() {
        return html! { <span>{ "Sin evidencias" }</span> };
    }
    images
        .iter()
        .map(|file| {
            let url = file.url.clone();
            let on_preview = on_preview.clone();
            html! {
                <img
                    class="thumb"
                    src={file.url.clone()}
                    alt={file.image.clone()}
                    onclick={Callback::from(move |_| on_preview.emit(url.clone()))}
                />
            }
        })
        .collect::<Html>()
}
