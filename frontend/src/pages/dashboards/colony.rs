use yew::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::pages::reports::colony::ColonyReports;
use crate::pages::reports::history::ReportHistory;

use super::DashboardProps;

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Reports,
    History,
}

pub enum Msg {
    Select(usize),
}

/// Colony president dashboard: own reports plus the closed-out history.
pub struct ColonyDashboard {
    section: Section,
}

impl Component for ColonyDashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ColonyDashboard {
            section: Section::Reports,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(index) => {
                self.section = if index == 0 {
                    Section::Reports
                } else {
                    Section::History
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let items = vec![AttrValue::Static("Reportes"), AttrValue::Static("Historial")];
        let active = match self.section {
            Section::Reports => 0,
            Section::History => 1,
        };
        let content = match self.section {
            Section::Reports => html! { <ColonyReports /> },
            Section::History => html! { <ReportHistory /> },
        };
        html! {
            <div class="dashboard">
                <Sidebar
                    items={items}
                    active={active}
                    on_select={ctx.link().callback(Msg::Select)}
                    on_logout={ctx.props().on_logout.clone()}
                />
                <div class="dashboard-content">
                    <h1>{ "Bienvenido Presidente de Colonia" }</h1>
                    { content }
                </div>
            </div>
        }
    }
}
