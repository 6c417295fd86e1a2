//! View rendering for the management engine: header with the register and
//! filter buttons, banners, the listing table with per-row actions, and the
//! modal/confirm/loading layers.

use yew::prelude::*;

use crate::components::confirm_alert::ConfirmAlert;
use crate::components::error_alert::ErrorAlert;
use crate::components::loading::loading_overlay;
use crate::components::modal_form::ModalForm;
use crate::components::table::Table;

use super::messages::Msg;
use super::resource::ManagedResource;
use super::state::ModalMode;
use super::ResourceManager;

pub fn view<R: ManagedResource>(
    component: &ResourceManager<R>,
    ctx: &Context<ResourceManager<R>>,
) -> Html {
    let link = ctx.link();
    let state = &component.state;
    // The deactivated set is read-only: actions disappear with the toggle.
    let show_actions = !(R::SUPPORTS_INACTIVE && state.show_inactive);

    let mut headers: Vec<AttrValue> = R::headers().into_iter().map(AttrValue::Static).collect();
    if show_actions {
        headers.push(AttrValue::Static("Acciones"));
    }

    let body = state
        .rows
        .iter()
        .filter(|row| !R::SUPPORTS_INACTIVE || R::is_active(row) != state.show_inactive)
        .map(|row| render_row::<R>(ctx, row, show_actions))
        .collect::<Html>();

    html! {
        <div class="page">
            <div class="page-head">
                <h1>{ R::TITLE }</h1>
                <div class="page-head-actions">
                    <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        { R::CREATE_LABEL }
                    </button>
                    {
                        if R::SUPPORTS_INACTIVE {
                            let label = if state.show_inactive { "Mostrar Activos" } else { "Mostrar Inactivos" };
                            html! {
                                <button class="btn-secondary" onclick={link.callback(|_| Msg::ToggleInactive)}>
                                    { label }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>

            {
                if let Some(error) = &state.error {
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
                if let Some(success) = &state.success {
                    html! { <div class="alert alert-success">{ success.clone() }</div> }
                } else {
                    html! {}
                }
            }

            <Table headers={headers}>
                { body }
            </Table>

            {
                if let Some(modal) = &state.modal {
                    let (title, fields) = match &modal.mode {
                        ModalMode::Create => (R::CREATE_TITLE, R::create_fields()),
                        ModalMode::Edit { .. } => (R::EDIT_TITLE, R::edit_fields()),
                        ModalMode::Transfer { .. } => (R::TRANSFER_TITLE, R::transfer_fields()),
                    };
                    html! {
                        <ModalForm
                            title={title}
                            fields={fields}
                            initial={modal.initial.clone()}
                            on_submit={link.callback(Msg::Submit)}
                            on_close={link.callback(|_| Msg::CloseModal)}
                        />
                    }
                } else {
                    html! {}
                }
            }
            {
                if state.row_to_delete.is_some() {
                    html! {
                        <ConfirmAlert
                            message={R::DELETE_PROMPT}
                            on_confirm={link.callback(|_| Msg::ConfirmDelete)}
                            on_cancel={link.callback(|_| Msg::CancelDelete)}
                        />
                    }
                } else {
                    html! {}
                }
            }
            { if state.loading { loading_overlay() } else { html! {} } }
        </div>
    }
}

fn render_row<R: ManagedResource>(
    ctx: &Context<ResourceManager<R>>,
    row: &R::Row,
    show_actions: bool,
) -> Html {
    let link = ctx.link();
    let cells = R::cells(row)
        .into_iter()
        .map(|cell| html! { <td>{ cell }</td> })
        .collect::<Html>();
    let actions = if show_actions {
        let edit = {
            let row = row.clone();
            link.callback(move |_| Msg::OpenEdit(row.clone()))
        };
        let transfer = {
            let row = row.clone();
            link.callback(move |_| Msg::OpenTransfer(row.clone()))
        };
        let delete = {
            let row = row.clone();
            link.callback(move |_| Msg::AskDelete(row.clone()))
        };
        html! {
            <td class="row-actions">
                <button class="btn-link" onclick={edit}>{ "Editar" }</button>
                <button class="btn-link" onclick={transfer}>{ "Transferir" }</button>
                <button class="btn-link danger" onclick={delete}>{ "Eliminar" }</button>
            </td>
        }
    } else {
        html! {}
    };
    html! {
        <tr key={R::uuid(row).to_string()}>
            { cells }
            { actions }
        </tr>
    }
}
