//! Read-only history of the colony's closed-out reports.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::report::Report;

use crate::api::{self, reports, ApiError};
use crate::components::badge::status_badge;
use crate::components::error_alert::ErrorAlert;
use crate::components::image_preview::{evidence_thumbnails, image_preview};
use crate::components::table::Table;
use crate::session;

const FETCH_ERROR: &str = "Error al obtener el historial. Verifica tu conexión o el token.";

pub enum Msg {
    Loaded(Result<Vec<Report>, ApiError>),
    Preview(String),
    ClosePreview,
    ShowError(String),
    ClearError,
}

pub struct ReportHistory {
    reports: Vec<Report>,
    preview: Option<String>,
    error: Option<String>,
}

impl Component for ReportHistory {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ReportHistory {
            reports: Vec::new(),
            preview: None,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(reports)) => {
                self.reports = reports;
                true
            }
            Msg::Loaded(Err(err)) => {
                self.error = Some(err.user_message(FETCH_ERROR));
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
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let headers: Vec<AttrValue> = ["Título", "Descripción", "Fecha", "Estado", "Evidencias"]
            .into_iter()
            .map(AttrValue::Static)
            .collect();
        let body = self
            .reports
            .iter()
            .map(|report| {
                html! {
                    <tr key={report.uuid.clone()}>
                        <td>{ report.title.clone() }</td>
                        <td>{ report.description.clone() }</td>
                        <td>{ report.date.clone() }</td>
                        <td>{ status_badge(report.status) }</td>
                        <td>{ evidence_thumbnails(&report.image, link.callback(Msg::Preview)) }</td>
                    </tr>
                }
            })
            .collect::<Html>();
        html! {
            <div class="page">
                <div class="page-head">
                    <h1>{ "Historial de Reportes" }</h1>
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
                <Table headers={headers}>
                    { body }
                </Table>
                {
                    if let Some(url) = &self.preview {
                        image_preview(url, link.callback(|_| Msg::ClosePreview))
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(token) = session::token() else {
            ctx.link()
                .send_message(Msg::ShowError(api::SESSION_MESSAGE.to_string()));
            return;
        };
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = reports::history(&token).await;
            link.send_message(Msg::Loaded(result));
        });
    }
}
