//! Update function of the management engine: receives the component state,
//! the context and a message, mutates accordingly, returns whether to
//! re-render.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::session;
use crate::validate;

use super::messages::{Done, Msg};
use super::resource::ManagedResource;
use super::state::{ModalMode, ModalState};
use super::ResourceManager;

const SUCCESS_BANNER_MS: u32 = 3000;
/// Time the transfer success banner stays visible before the forced
/// sign-out kicks in.
const TRANSFER_SIGN_OUT_MS: u32 = 3500;

pub fn update<R: ManagedResource>(
    component: &mut ResourceManager<R>,
    ctx: &Context<ResourceManager<R>>,
    msg: Msg<R::Row>,
) -> bool {
    match msg {
        Msg::RowsLoaded(Ok(rows)) => {
            component.state.rows = rows;
            true
        }
        Msg::RowsLoaded(Err(err)) => {
            // The previously loaded list stays as-is.
            component.state.error = Some(err.user_message(R::FETCH_ERROR));
            true
        }
        Msg::ToggleInactive => {
            component.state.show_inactive = !component.state.show_inactive;
            true
        }
        Msg::OpenCreate => {
            component.state.modal = Some(ModalState {
                mode: ModalMode::Create,
                initial: validate::FormDraft::new(),
            });
            true
        }
        Msg::OpenEdit(row) => {
            component.state.modal = Some(ModalState {
                mode: ModalMode::Edit {
                    uuid: R::uuid(&row).to_string(),
                },
                initial: R::edit_draft(&row),
            });
            true
        }
        Msg::OpenTransfer(row) => {
            component.state.modal = Some(ModalState {
                mode: ModalMode::Transfer {
                    uuid: R::uuid(&row).to_string(),
                },
                initial: validate::FormDraft::new(),
            });
            true
        }
        Msg::CloseModal => {
            component.state.modal = None;
            true
        }
        Msg::Submit(draft) => submit(component, ctx, draft),
        Msg::AskDelete(row) => {
            component.state.row_to_delete = Some(row);
            true
        }
        Msg::CancelDelete => {
            component.state.row_to_delete = None;
            true
        }
        Msg::ConfirmDelete => confirm_delete(component, ctx),
        Msg::Finished(done, result) => finished(component, ctx, done, result),
        Msg::ShowError(message) => {
            component.state.error = Some(message);
            true
        }
        Msg::ClearError => {
            component.state.error = None;
            true
        }
        Msg::ClearSuccess(generation) => {
            if generation == component.state.success_generation {
                component.state.success = None;
                true
            } else {
                false
            }
        }
        Msg::SignOutNow => {
            ctx.props().on_logout.emit(());
            false
        }
    }
}

/// Fetches the list and reports back with `RowsLoaded`.
pub fn reload<R: ManagedResource>(ctx: &Context<ResourceManager<R>>) {
    let Some(token) = session::token() else {
        ctx.link()
            .send_message(Msg::ShowError(api::SESSION_MESSAGE.to_string()));
        return;
    };
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = R::list(&token).await;
        link.send_message(Msg::RowsLoaded(result));
    });
}

fn submit<R: ManagedResource>(
    component: &mut ResourceManager<R>,
    ctx: &Context<ResourceManager<R>>,
    draft: validate::FormDraft,
) -> bool {
    let Some(modal) = &component.state.modal else {
        return false;
    };
    let mode = modal.mode.clone();
    let (rules, done) = match &mode {
        ModalMode::Create => (R::create_rules(), Done::Created),
        ModalMode::Edit { .. } => (R::edit_rules(), Done::Updated),
        ModalMode::Transfer { .. } => (R::transfer_rules(), Done::Transferred),
    };
    if let Err(message) = validate::validate(&draft, &rules) {
        component.state.error = Some(message);
        return true;
    }
    let Some(token) = session::token() else {
        component.state.error = Some(api::SESSION_MESSAGE.to_string());
        return true;
    };
    component.state.loading = true;
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = match &mode {
            ModalMode::Create => R::create(&token, &draft).await,
            ModalMode::Edit { uuid } => R::update(&token, uuid, &draft).await,
            ModalMode::Transfer { uuid } => R::transfer(&token, uuid, &draft).await,
        };
        link.send_message(Msg::Finished(done, result));
    });
    true
}

fn confirm_delete<R: ManagedResource>(
    component: &mut ResourceManager<R>,
    ctx: &Context<ResourceManager<R>>,
) -> bool {
    let Some(row) = &component.state.row_to_delete else {
        return false;
    };
    let Some(token) = session::token() else {
        component.state.error = Some(api::SESSION_MESSAGE.to_string());
        return true;
    };
    let uuid = R::uuid(row).to_string();
    component.state.loading = true;
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = R::delete(&token, &uuid).await;
        link.send_message(Msg::Finished(Done::Deleted, result));
    });
    true
}

fn finished<R: ManagedResource>(
    component: &mut ResourceManager<R>,
    ctx: &Context<ResourceManager<R>>,
    done: Done,
    result: Result<(), api::ApiError>,
) -> bool {
    component.state.loading = false;
    match result {
        Ok(()) => {
            component.state.modal = None;
            component.state.row_to_delete = None;
            let message = match done {
                Done::Created => R::CREATED_MESSAGE,
                Done::Updated => R::UPDATED_MESSAGE,
                Done::Deleted => R::DELETED_MESSAGE,
                Done::Transferred => R::TRANSFERRED_MESSAGE,
            };
            component.state.success = Some(message.to_string());
            component.state.success_generation += 1;
            schedule_success_clear(ctx, component.state.success_generation);
            if done == Done::Transferred {
                // The backend has replaced the credentials this session
                // signed in with; leave the banner up, then sign out.
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(TRANSFER_SIGN_OUT_MS).await;
                    link.send_message(Msg::SignOutNow);
                });
            } else {
                reload::<R>(ctx);
            }
        }
        Err(err) => {
            let fallback = match done {
                Done::Created => R::CREATE_ERROR,
                Done::Updated => R::UPDATE_ERROR,
                Done::Deleted => R::DELETE_ERROR,
                Done::Transferred => R::TRANSFER_ERROR,
            };
            component.state.error = Some(err.user_message(fallback));
        }
    }
    true
}

fn schedule_success_clear<R: ManagedResource>(
    ctx: &Context<ResourceManager<R>>,
    generation: u32,
) {
    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(SUCCESS_BANNER_MS).await;
        link.send_message(Msg::ClearSuccess(generation));
    });
}
