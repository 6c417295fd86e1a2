use yew::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::pages::areas::AreasPage;
use crate::pages::colonies::ColoniesPage;
use crate::pages::reports::municipal::MunicipalReports;

use super::DashboardProps;

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Colonies,
    Areas,
    Reports,
}

pub enum Msg {
    Select(usize),
}

/// Municipal officer dashboard: colonies, responding areas, report triage.
pub struct MunicipalDashboard {
    section: Section,
}

impl Component for MunicipalDashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MunicipalDashboard {
            section: Section::Colonies,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(index) => {
                self.section = match index {
                    0 => Section::Colonies,
                    1 => Section::Areas,
                    _ => Section::Reports,
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let items = vec![
            AttrValue::Static("Colonias"),
            AttrValue::Static("Áreas"),
            AttrValue::Static("Reportes"),
        ];
        let active = match self.section {
            Section::Colonies => 0,
            Section::Areas => 1,
            Section::Reports => 2,
        };
        let content = match self.section {
            Section::Colonies => html! {
                <ColoniesPage on_logout={ctx.props().on_logout.clone()} />
            },
            Section::Areas => html! {
                <AreasPage on_logout={ctx.props().on_logout.clone()} />
            },
            Section::Reports => html! { <MunicipalReports /> },
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
                    <h1>{ "Bienvenido Administrador de Municipio" }</h1>
                    { content }
                </div>
            </div>
        }
    }
}
