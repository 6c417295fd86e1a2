//! Root component: restores a persisted session on boot, guards the role
//! dashboards behind a present token, and owns the only two session
//! transitions (sign-in hands a landing route up from the login page,
//! sign-out clears storage and falls back to login).

use yew::prelude::*;

use crate::pages::dashboards::area::AreaDashboard;
use crate::pages::dashboards::colony::ColonyDashboard;
use crate::pages::dashboards::municipal::MunicipalDashboard;
use crate::pages::dashboards::state::StateDashboard;
use crate::pages::login::Login;
use crate::routes::Route;
use crate::session;

pub enum Msg {
    LoggedIn(Route),
    Logout,
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            route: session::restore().unwrap_or(Route::Login),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn(route) => {
                self.route = route;
                true
            }
            Msg::Logout => {
                session::clear();
                self.route = Route::Login;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        // Advisory client-side guard: a protected route without a token
        // falls back to login. The backend still authorizes every request.
        let route = if self.route != Route::Login && session::load().is_none() {
            Route::Login
        } else {
            self.route
        };
        let on_logout = ctx.link().callback(|_| Msg::Logout);
        match route {
            Route::Login => html! {
                <Login on_login={ctx.link().callback(Msg::LoggedIn)} />
            },
            Route::State => html! { <StateDashboard on_logout={on_logout} /> },
            Route::Municipality => html! { <MunicipalDashboard on_logout={on_logout} /> },
            Route::Colony => html! { <ColonyDashboard on_logout={on_logout} /> },
            Route::Area => html! { <AreaDashboard on_logout={on_logout} /> },
        }
    }
}
