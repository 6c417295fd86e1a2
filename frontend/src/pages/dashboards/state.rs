use yew::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::pages::municipalities::MunicipalitiesPage;

use super::DashboardProps;

/// State officer dashboard: manages the municipality collection.
pub struct StateDashboard;

impl Component for StateDashboard {
    type Message = ();
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StateDashboard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let items = vec![AttrValue::Static("Municipios")];
        html! {
            <div class="dashboard">
                <Sidebar
                    items={items}
                    active={0}
                    on_select={Callback::noop()}
                    on_logout={ctx.props().on_logout.clone()}
                />
                <div class="dashboard-content">
                    <h1>{ "Bienvenido Administrador Estatal" }</h1>
                    <MunicipalitiesPage on_logout={ctx.props().on_logout.clone()} />
                </div>
            </div>
        }
    }
}
