//! Generic list-management engine: every "list + create + edit + delete +
//! transfer" page is this one component instantiated with a
//! [`ManagedResource`] configuration.
//!
//! The flow is identical for every resource: load the list on mount, stage
//! edits in a modal draft, validate against the resource's rule table,
//! submit, then reconcile by re-fetching the list (never by trusting the
//! draft, since the server computes `uuid` and `status`). One success and
//! one error banner at most; later messages replace earlier ones.

mod messages;
mod resource;
mod state;
mod update;
mod view;

pub use messages::{Done, Msg};
pub use resource::{draft_field, ManagedResource};
pub use state::{ManagerState, ModalMode, ModalState};

use std::marker::PhantomData;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ManagerProps {
    /// Ends the session app-wide. Used after a responsible-party transfer,
    /// which invalidates the credentials this session signed in with.
    pub on_logout: Callback<()>,
}

pub struct ResourceManager<R: ManagedResource> {
    pub state: ManagerState<R::Row>,
    _marker: PhantomData<R>,
}

impl<R: ManagedResource> Component for ResourceManager<R> {
    type Message = Msg<R::Row>;
    type Properties = ManagerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResourceManager {
            state: ManagerState::new(),
            _marker: PhantomData,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::reload::<R>(ctx);
        }
    }
}
