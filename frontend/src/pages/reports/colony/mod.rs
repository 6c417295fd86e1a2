//! Colony president's report page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view
//! rendering. Reports are listed on mount; creation goes out as one
//! multipart POST carrying the text fields and up to three evidence images.

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ColonyReports;

use yew::prelude::*;

impl Component for ColonyReports {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ColonyReports::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::reload(ctx);
        }
    }
}
