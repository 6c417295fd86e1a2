use yew::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::pages::reports::area::AreaStatus;

use super::DashboardProps;

/// Area responder dashboard: the queue of reports routed to this area.
pub struct AreaDashboard;

impl Component for AreaDashboard {
    type Message = ();
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AreaDashboard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let items = vec![AttrValue::Static("Problemas")];
        html! {
            <div class="dashboard">
                <Sidebar
                    items={items}
                    active={0}
                    on_select={Callback::noop()}
                    on_logout={ctx.props().on_logout.clone()}
                />
                <div class="dashboard-content">
                    <h1>{ "Bienvenido Administrador de Area" }</h1>
                    <AreaStatus />
                </div>
            </div>
        }
    }
}
