//! View rendering for the colony report page: listing with evidence
//! thumbnails, the creation modal with its attachment strip, and the
//! cancel confirmation.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::report::ReportStatus;

use crate::components::badge::status_badge;
use crate::components::confirm_alert::ConfirmAlert;
use crate::components::error_alert::ErrorAlert;
use crate::components::image_preview::{evidence_thumbnails, image_preview};
use crate::components::loading::loading_overlay;
use crate::components::table::Table;
use crate::pages::reports::attachments::MAX_FILES;

use super::messages::Msg;
use super::state::ColonyReports;

pub fn view(component: &ColonyReports, ctx: &Context<ColonyReports>) -> Html {
    let link = ctx.link();
    let headers: Vec<AttrValue> = ["Título", "Descripción", "Fecha", "Estado", "Evidencias", "Acciones"]
        .into_iter()
        .map(AttrValue::Static)
        .collect();

    let body = component
        .reports
        .iter()
        .map(|report| {
            let cancel = if report.status == ReportStatus::Pendiente {
                let report = report.clone();
                html! {
                    <button
                        class="btn-link danger"
                        onclick={link.callback(move |_| Msg::AskCancel(report.clone()))}
                    >
                        { "Cancelar" }
                    </button>
                }
            } else {
                html! {}
            };
            html! {
                <tr key={report.uuid.clone()}>
                    <td>{ report.title.clone() }</td>
                    <td>{ report.description.clone() }</td>
                    <td>{ report.date.clone() }</td>
                    <td>{ status_badge(report.status) }</td>
                    <td>{ evidence_thumbnails(&report.image, link.callback(Msg::Preview)) }</td>
                    <td class="row-actions">{ cancel }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="page">
            <div class="page-head">
                <h1>{ "Mis Reportes" }</h1>
                <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                    { "Nuevo Reporte" }
                </button>
            </div>

            {
                if let Some(error) = &component.error {
                    html! {
                        <ErrorAlert
                            message={error.clone()}
                            on_close={link.callback(|_| Msg::ClearError)}
                        />
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(success) = &component.success {
                    html! { <div class="alert alert-success">{ success.clone() }</div> }
                } else {
                    html! {}
                }
            }

            <Table headers={headers}>
                { body }
            </Table>

            { if component.modal_open { create_modal(component, link) } else { html! {} } }
            {
                if component.report_to_cancel.is_some() {
                    html! {
                        <ConfirmAlert
                            message="¿Estás seguro de cancelar este reporte?"
                            confirm_label="Sí, cancelar"
                            on_confirm={link.callback(|_| Msg::ConfirmCancel)}
                            on_cancel={link.callback(|_| Msg::DismissCancel)}
                        />
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(url) = &component.preview {
                    image_preview(url, link.callback(|_| Msg::ClosePreview))
                } else {
                    html! {}
                }
            }
            { if component.loading { loading_overlay() } else { html! {} } }
        </div>
    }
}

fn create_modal(component: &ColonyReports, link: &Scope<ColonyReports>) -> Html {
    html! {
        <div class="modal-overlay">
            <div class="modal-card">
                <div class="modal-head">
                    <h2>{ "Crear Nuevo Reporte" }</h2>
                    <button class="modal-close" onclick={link.callback(|_| Msg::CloseModal)}>
                        { "×" }
                    </button>
                </div>
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div class="form-field">
                        <label>{ "Título" }</label>
                        <input
                            type="text"
                            placeholder="Ingrese el título del reporte"
                            value={component.title.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                Msg::SetTitle(value)
                            })}
                        />
                    </div>
                    <div class="form-field">
                        <label>{ "Descripción" }</label>
                        <textarea
                            placeholder="Describa el problema"
                            value={component.description.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                                Msg::SetDescription(value)
                            })}
                        />
                    </div>
                    <div class="form-field">
                        <label>{ "Fecha" }</label>
                        <input
                            type="date"
                            value={component.date.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                Msg::SetDate(value)
                            })}
                        />
                    </div>
                    { attachment_strip(component, link) }
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            onclick={link.callback(|_| Msg::CloseModal)}
                        >
                            { "Cancelar" }
                        </button>
                        <button type="submit" class="btn-primary">{ "Guardar" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn attachment_strip(component: &ColonyReports, link: &Scope<ColonyReports>) -> Html {
    let thumbs = component
        .attachments
        .iter()
        .enumerate()
        .map(|(index, attachment)| {
            let image = match &attachment.preview {
                Some(data_url) => html! { <img class="thumb" src={data_url.clone()} /> },
                None => html! { <span class="thumb-placeholder">{ "..." }</span> },
            };
            html! {
                <div class="attachment">
                    { image }
                    <button
                        type="button"
                        class="attachment-remove"
                        onclick={link.callback(move |_| Msg::RemoveAttachment(index))}
                    >
                        { "×" }
                    </button>
                </div>
            }
        })
        .collect::<Html>();
    html! {
        <div class="form-field">
            <label>{ "Evidencias" }</label>
            <div class="attachment-strip">
                { thumbs }
                {
                    if component.attachments.len() < MAX_FILES {
                        html! {
                            <button
                                type="button"
                                class="btn-secondary"
                                onclick={link.callback(|_| Msg::OpenFileDialog)}
                            >
                                { "Agregar imágenes" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <span class="field-hint">
                { "Máximo 3 imágenes JPEG o PNG, 10 MB cada una." }
            </span>
            <input
                ref={component.file_input_ref.clone()}
                type="file"
                accept="image/jpeg,image/png"
                multiple=true
                style="display:none;"
                onchange={link.callback(|e: Event| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    let mut files = Vec::new();
                    if let Some(list) = input.files() {
                        for index in 0..list.length() {
                            if let Some(file) = list.item(index) {
                                files.push(file);
                            }
                        }
                    }
                    Msg::FilesChosen(files)
                })}
            />
        </div>
    }
}
