//! Municipal report triage: every incoming report, with a modal to route a
//! report to the responding area. The area select is fed from the area
//! collection fetched alongside the reports.

use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::area::Area;
use common::model::report::Report;
use common::requests::AssignReportAreaRequest;

use crate::api::{self, areas, reports, ApiError};
use crate::components::badge::status_badge;
use crate::components::error_alert::ErrorAlert;
use crate::components::image_preview::{evidence_thumbnails, image_preview};
use crate::components::loading::loading_overlay;
use crate::components::table::Table;
use crate::session;

const FETCH_REPORTS_ERROR: &str =
    "Error al obtener los reportes. Verifica tu conexión o el token.";
const FETCH_AREAS_ERROR: &str = "Error al obtener las áreas. Verifica tu conexión o el token.";
const ASSIGN_ERROR: &str = "Error al actualizar el reporte. Intenta nuevamente.";
const ASSIGNED_MESSAGE: &str = "El reporte se actualizó correctamente.";
const NO_AREA_SELECTED: &str = "Por favor, selecciona un área.";
const SUCCESS_BANNER_MS: u32 = 3000;

pub enum Msg {
    ReportsLoaded(Result<Vec<Report>, ApiError>),
    AreasLoaded(Result<Vec<Area>, ApiError>),
    OpenAssign(Report),
    CloseAssign,
    SelectArea(String),
    ConfirmAssign,
    Assigned(Result<(), ApiError>),
    Preview(String),
    ClosePreview,
    ShowError(String),
    ClearError,
    ClearSuccess(u32),
}

pub struct MunicipalReports {
    reports: Vec<Report>,
    areas: Vec<Area>,
    assign_target: Option<Report>,
    selected_area: String,
    preview: Option<String>,
    success: Option<String>,
    success_generation: u32,
    error: Option<String>,
    loading: bool,
}

impl Component for MunicipalReports {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        MunicipalReports {
            reports: Vec::new(),
            areas: Vec::new(),
            assign_target: None,
            selected_area: String::new(),
            preview: None,
            success: None,
            success_generation: 0,
            error: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ReportsLoaded(Ok(reports)) => {
                self.reports = reports;
                true
            }
            Msg::ReportsLoaded(Err(err)) => {
                self.error = Some(err.user_message(FETCH_REPORTS_ERROR));
                true
            }
            Msg::AreasLoaded(Ok(areas)) => {
                self.areas = areas;
                true
            }
            Msg::AreasLoaded(Err(err)) => {
                self.error = Some(err.user_message(FETCH_AREAS_ERROR));
                true
            }
            Msg::OpenAssign(report) => {
                self.assign_target = Some(report);
                self.selected_area = String::new();
                true
            }
            Msg::CloseAssign => {
                self.assign_target = None;
                true
            }
            Msg::SelectArea(uuid) => {
                self.selected_area = uuid;
                false
            }
            Msg::ConfirmAssign => self.confirm_assign(ctx),
            Msg::Assigned(result) => {
                self.loading = false;
                match result {
                    Ok(()) => {
                        self.assign_target = None;
                        self.success = Some(ASSIGNED_MESSAGE.to_string());
                        self.success_generation += 1;
                        let generation = self.success_generation;
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                            link.send_message(Msg::ClearSuccess(generation));
                        });
                        reload_reports(ctx);
                    }
                    Err(err) => {
                        self.error = Some(err.user_message(ASSIGN_ERROR));
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
        let headers: Vec<AttrValue> =
            ["Título", "Fecha", "Estado", "Colonia", "Municipio", "Evidencias", "Acciones"]
                .into_iter()
                .map(AttrValue::Static)
                .collect();
        let body = self
            .reports
            .iter()
            .map(|report| {
                let open = {
                    let report = report.clone();
                    link.callback(move |_| Msg::OpenAssign(report.clone()))
                };
                html! {
                    <tr key={report.uuid.clone()}>
                        <td>{ report.title.clone() }</td>
                        <td>{ report.date.clone() }</td>
                        <td>{ status_badge(report.status) }</td>
                        <td>{ report.colony_name.clone() }</td>
                        <td>{ report.municipality_name.clone() }</td>
                        <td>{ evidence_thumbnails(&report.image, link.callback(Msg::Preview)) }</td>
                        <td class="row-actions">
                            <button class="btn-primary" onclick={open}>{ "Mandar a área" }</button>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>();

        html! {
            <div class="page">
                <div class="page-head">
                    <h1>{ "Reportes" }</h1>
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
                { if self.assign_target.is_some() { self.assign_modal(ctx) } else { html! {} } }
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
        if !first_render {
            return;
        }
        reload_reports(ctx);
        let Some(token) = session::token() else {
            return;
        };
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = areas::list(&token).await;
            link.send_message(Msg::AreasLoaded(result));
        });
    }
}

impl MunicipalReports {
    fn confirm_assign(&mut self, ctx: &Context<Self>) -> bool {
        let Some(report) = &self.assign_target else {
            return false;
        };
        if self.selected_area.is_empty() {
            self.error = Some(NO_AREA_SELECTED.to_string());
            return true;
        }
        let Some(token) = session::token() else {
            self.error = Some(api::SESSION_MESSAGE.to_string());
            return true;
        };
        let body = AssignReportAreaRequest {
            uuid: report.uuid.clone(),
            uuid_area: self.selected_area.clone(),
        };
        self.loading = true;
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = reports::assign_area(&token, &body).await;
            link.send_message(Msg::Assigned(result));
        });
        true
    }

    fn assign_modal(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="modal-overlay">
                <div class="modal-card">
                    <h3>{ "Modificar Estatus del Reporte" }</h3>
                    <label>{ "Selecciona un área" }</label>
                    <select onchange={link.callback(|e: Event| {
                        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                        Msg::SelectArea(value)
                    })}>
                        <option value="" selected={self.selected_area.is_empty()}>
                            { "-- Selecciona un área --" }
                        </option>
                        {
                            self.areas.iter().map(|area| html! {
                                <option
                                    value={area.uuid.clone()}
                                    selected={self.selected_area == area.uuid}
                                >
                                    { area.name_area.clone() }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <div class="modal-actions">
                        <button
                            class="btn-secondary"
                            onclick={link.callback(|_| Msg::CloseAssign)}
                        >
                            { "Cancelar" }
                        </button>
                        <button
                            class="btn-primary"
                            onclick={link.callback(|_| Msg::ConfirmAssign)}
                        >
                            { "Guardar" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

fn reload_reports(ctx: &Context<MunicipalReports>) {
    let Some(token) = session::token() else {
        ctx.link()
            .send_message(Msg::ShowError(api::SESSION_MESSAGE.to_string()));
        return;
    };
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = reports::list(&token).await;
        link.send_message(Msg::ReportsLoaded(result));
    });
}
