//! Area responder's queue: reports routed to the signed-in area, with a
//! confirm-then-resolve action per row.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::report::{Report, ReportStatus};
use common::requests::ReportStatusUpdateRequest;

use crate::api::{self, reports, ApiError};
use crate::components::badge::status_badge;
use crate::components::confirm_alert::ConfirmAlert;
use crate::components::error_alert::ErrorAlert;
use crate::components::image_preview::{evidence_thumbnails, image_preview};
use crate::components::loading::loading_overlay;
use crate::components::table::Table;
use crate::session;

const FETCH_ERROR: &str = "Error al obtener los problemas. Verifica tu conexión o el token.";
const UPDATE_ERROR: &str = "Error al actualizar el problema. Intenta nuevamente.";
const UPDATED_MESSAGE: &str = "El problema se actualizó correctamente.";
/// Closing note the backend stores with the resolution.
const STATUS_DESCRIPTION: &str = "Se realizo con eficacia el asunto";
const SUCCESS_BANNER_MS: u32 = 3000;

pub enum Msg {
    Loaded(Result<Vec<Report>, ApiError>),
    AskUpdate(Report),
    DismissUpdate,
    ConfirmUpdate,
    Updated(Result<(), ApiError>),
    Preview(String),
    ClosePreview,
    ShowError(String),
    ClearError,
    ClearSuccess(u32),
}

pub struct AreaStatus {
    reports: Vec<Report>,
    report_to_update: Option<Report>,
    preview: Option<String>,
    success: Option<String>,
    success_generation: u32,
    error: Option<String>,
    loading: bool,
}

impl Component for AreaStatus {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AreaStatus {
            reports: Vec::new(),
            report_to_update: None,
            preview: None,
            success: None,
            success_generation: 0,
            error: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(reports)) => {
                self.reports = reports;
                true
            }
            Msg::Loaded(Err(err)) => {
                self.error = Some(err.user_message(FETCH_ERROR));
                true
            }
            Msg::AskUpdate(report) => {
                self.report_to_update = Some(report);
                true
            }
            Msg::DismissUpdate => {
                self.report_to_update = None;
                true
            }
            Msg::ConfirmUpdate => self.confirm_update(ctx),
            Msg::Updated(result) => {
                self.loading = false;
                self.report_to_update = None;
                match result {
                    Ok(()) => {
                        self.success = Some(UPDATED_MESSAGE.to_string());
                        self.success_generation += 1;
                        let generation = self.success_generation;
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                            link.send_message(Msg::ClearSuccess(generation));
                        });
                        reload(ctx);
                    }
                    Err(err) => {
                        self.error = Some(err.user_message(UPDATE_ERROR));
                    }
                }
                true
            }
            Msg::Preview(url) => {
                self.preview = Some(url);
                true
            }
            Msg::ClosePreview => {
                self.preview = None;
                true
            }
            Msg::ShowError(message) => {
                self.error = Some(message);
                true
            }
            Msg::ClearError => {
                self.error = None;
                true
            }
            Msg::ClearSuccess(generation) => {
                if generation == self.success_generation {
                    self.success = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let headers: Vec<AttrValue> = [
            "Título",
            "Descripción",
            "Estado",
            "Fecha",
            "Colonia",
            "Municipio",
            "Evidencias",
            "Acciones",
        ]
        .into_iter()
        .map(AttrValue::Static)
        .collect();
        let body = self
            .reports
            .iter()
            .map(|report| {
                let action = if report.status == ReportStatus::Pendiente {
                    let report = report.clone();
                    html! {
                        <button
                            class="btn-primary"
                            onclick={link.callback(move |_| Msg::AskUpdate(report.clone()))}
                        >
                            { "Actualizar Estado" }
                        </button>
                    }
                } else {
                    html! {}
                };
                html! {
                    <tr key={report.uuid.clone()}>
                        <td>{ report.title.clone() }</td>
                        <td>{ report.description.clone() }</td>
                        <td>{ status_badge(report.status) }</td>
                        <td>{ report.date.clone() }</td>
                        <td>{ report.colony_name.clone() }</td>
                        <td>{ report.municipality_name.clone() }</td>
                        <td>{ evidence_thumbnails(&report.image, link.callback(Msg::Preview)) }</td>
                        <td class="row-actions">{ action }</td>
                    </tr>
                }
            })
            .collect::<Html>();

        html! {
            <div class="page">
                <div class="page-head">
                    <h1>{ "Gestión de Problemas del Área" }</h1>
                </div>
                {
                    if let Some(error) = &self.error {
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
                    if let Some(success) = &self.success {
                        html! { <div class="alert alert-success">{ success.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
                <Table headers={headers}>
                    { body }
                </Table>
                {
                    if self.report_to_update.is_some() {
                        html! {
                            <ConfirmAlert
                                message="¿Estás seguro de que deseas actualizar el estado del problema?"
                                confirm_label="Confirmar"
                                on_confirm={link.callback(|_| Msg::ConfirmUpdate)}
                                on_cancel={link.callback(|_| Msg::DismissUpdate)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(url) = &self.preview {
                        image_preview(url, link.callback(|_| Msg::ClosePreview))
                    } else {
                        html! {}
                    }
                }
                { if self.loading { loading_overlay() } else { html! {} } }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            reload(ctx);
        }
    }
}

impl AreaStatus {
    fn confirm_update(&mut self, ctx: &Context<Self>) -> bool {
        let Some(report) = &self.report_to_update else {
            return false;
        };
        let Some(token) = session::token() else {
            self.error = Some(api::SESSION_MESSAGE.to_string());
            return true;
        };
        let body = ReportStatusUpdateRequest {
            uuid: report.uuid.clone(),
            status_description: STATUS_DESCRIPTION.to_string(),
        };
        self.loading = true;
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = reports::update_status(&token, &body).await;
            link.send_message(Msg::Updated(result));
        });
        true
    }
}

fn reload(ctx: &Context<AreaStatus>) {
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
