//! Update function for the colony report page: listing, report creation
//! with staged evidence files, and cancellation of pending reports.

use base64::engine::general_purpose;
use base64::Engine as _;
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use gloo_timers::future::TimeoutFuture;
use web_sys::{FormData, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, reports};
use crate::pages::reports::attachments::check_attachments;
use crate::session;
use crate::validate::{validate, FormDraft, Rule};

use super::messages::Msg;
use super::state::{Attachment, ColonyReports};

const FETCH_ERROR: &str = "Error al obtener los reportes. Verifica tu conexión o el token.";
const CREATE_ERROR: &str = "Error al crear el reporte. Verifica los datos enviados.";
const CANCEL_ERROR: &str = "Error al cancelar el reporte. Intenta nuevamente.";
const CREATED_MESSAGE: &str = "Reporte creado correctamente.";
const CANCELLED_MESSAGE: &str = "Reporte cancelado correctamente.";
const SUCCESS_BANNER_MS: u32 = 3000;

pub fn update(component: &mut ColonyReports, ctx: &Context<ColonyReports>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(Ok(reports)) => {
            component.reports = reports;
            true
        }
        Msg::Loaded(Err(err)) => {
            component.error = Some(err.user_message(FETCH_ERROR));
            true
        }
        Msg::OpenCreate => {
            component.reset_draft();
            component.modal_open = true;
            true
        }
        Msg::CloseModal => {
            component.modal_open = false;
            component.reset_draft();
            true
        }
        Msg::SetTitle(value) => {
            component.title = value;
            false
        }
        Msg::SetDescription(value) => {
            component.description = value;
            false
        }
        Msg::SetDate(value) => {
            component.date = value;
            false
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FilesChosen(files) => files_chosen(component, ctx, files),
        Msg::PreviewReady(name, data_url) => {
            if let Some(attachment) = component
                .attachments
                .iter_mut()
                .find(|attachment| attachment.preview.is_none() && attachment.file.name() == name)
            {
                attachment.preview = Some(data_url);
            }
            true
        }
        Msg::RemoveAttachment(index) => {
            if index < component.attachments.len() {
                component.attachments.remove(index);
            }
            true
        }
        Msg::Submit => submit(component, ctx),
        Msg::Submitted(result) => {
            component.loading = false;
            match result {
                Ok(()) => {
                    component.modal_open = false;
                    component.reset_draft();
                    set_success(component, ctx, CREATED_MESSAGE);
                    reload(ctx);
                }
                Err(err) => {
                    component.error = Some(err.user_message(CREATE_ERROR));
                }
            }
            true
        }
        Msg::AskCancel(report) => {
            component.report_to_cancel = Some(report);
            true
        }
        Msg::DismissCancel => {
            component.report_to_cancel = None;
            true
        }
        Msg::ConfirmCancel => confirm_cancel(component, ctx),
        Msg::Cancelled(result) => {
            component.loading = false;
            component.report_to_cancel = None;
            match result {
                Ok(()) => {
                    set_success(component, ctx, CANCELLED_MESSAGE);
                    reload(ctx);
                }
                Err(err) => {
                    component.error = Some(err.user_message(CANCEL_ERROR));
                }
            }
            true
        }
        Msg::Preview(url) => {
            component.preview = Some(url);
            true
        }
        Msg::ClosePreview => {
            component.preview = None;
            true
        }
        Msg::ShowError(message) => {
            component.error = Some(message);
            true
        }
        Msg::ClearError => {
            component.error = None;
            true
        }
        Msg::ClearSuccess(generation) => {
            if generation == component.success_generation {
                component.success = None;
                true
            } else {
                false
            }
        }
    }
}

pub fn reload(ctx: &Context<ColonyReports>) {
    let Some(token) = session::token() else {
        ctx.link()
            .send_message(Msg::ShowError(api::SESSION_MESSAGE.to_string()));
        return;
    };
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = reports::list(&token).await;
        link.send_message(Msg::Loaded(result));
    });
}

fn files_chosen(
    component: &mut ColonyReports,
    ctx: &Context<ColonyReports>,
    files: Vec<web_sys::File>,
) -> bool {
    // Validate the would-be total before accepting anything.
    let mut combined: Vec<(String, f64)> = component
        .attachments
        .iter()
        .map(|attachment| (attachment.file.type_(), attachment.file.size()))
        .collect();
    combined.extend(files.iter().map(|file| (file.type_(), file.size())));
    if let Err(message) = check_attachments(&combined) {
        component.error = Some(message);
        return true;
    }
    for file in files {
        let name = file.name();
        let mime = file.type_();
        let blob = Blob::from(file.clone());
        component.attachments.push(Attachment {
            file,
            preview: None,
        });
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(bytes) = read_as_bytes(&blob).await {
                let base64 = general_purpose::STANDARD.encode(&bytes);
                let data_url = format!("data:{mime};base64,{base64}");
                link.send_message(Msg::PreviewReady(name, data_url));
            }
        });
    }
    // Reset the input so re-picking the same file fires onchange again.
    if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
    true
}

fn submit(component: &mut ColonyReports, ctx: &Context<ColonyReports>) -> bool {
    let draft = FormDraft::from([
        ("title".to_string(), component.title.clone()),
        ("description".to_string(), component.description.clone()),
        ("date".to_string(), component.date.clone()),
    ]);
    let rules = [
        Rule::Required {
            field: "title",
            message: "El título del reporte es obligatorio.",
        },
        Rule::Required {
            field: "description",
            message: "La descripción del reporte es obligatoria.",
        },
        Rule::Required {
            field: "date",
            message: "La fecha del reporte es obligatoria.",
        },
    ];
    if let Err(message) = validate(&draft, &rules) {
        component.error = Some(message);
        return true;
    }
    let staged: Vec<(String, f64)> = component
        .attachments
        .iter()
        .map(|attachment| (attachment.file.type_(), attachment.file.size()))
        .collect();
    if let Err(message) = check_attachments(&staged) {
        component.error = Some(message);
        return true;
    }
    let Some(token) = session::token() else {
        component.error = Some(api::SESSION_MESSAGE.to_string());
        return true;
    };
    let form = match FormData::new() {
        Ok(form) => form,
        Err(_) => {
            component.error = Some(CREATE_ERROR.to_string());
            return true;
        }
    };
    let _ = form.append_with_str("title", &component.title);
    let _ = form.append_with_str("description", &component.description);
    let _ = form.append_with_str("date", &component.date);
    for attachment in &component.attachments {
        let _ = form.append_with_blob_and_filename(
            "image",
            &attachment.file,
            &attachment.file.name(),
        );
    }
    component.loading = true;
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = reports::create(&token, form).await;
        link.send_message(Msg::Submitted(result));
    });
    true
}

fn confirm_cancel(component: &mut ColonyReports, ctx: &Context<ColonyReports>) -> bool {
    let Some(report) = &component.report_to_cancel else {
        return false;
    };
    let Some(token) = session::token() else {
        component.error = Some(api::SESSION_MESSAGE.to_string());
        return true;
    };
    let uuid = report.uuid.clone();
    component.loading = true;
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = reports::cancel(&token, &uuid).await;
        link.send_message(Msg::Cancelled(result));
    });
    true
}

fn set_success(component: &mut ColonyReports, ctx: &Context<ColonyReports>, message: &str) {
    component.success = Some(message.to_string());
    component.success_generation += 1;
    let generation = component.success_generation;
    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(SUCCESS_BANNER_MS).await;
        link.send_message(Msg::ClearSuccess(generation));
    });
}
