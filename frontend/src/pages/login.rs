//! Login screen: the only door into the role dashboards.
//!
//! Credentials go to the sign-in endpoint; a 2xx answer carries a role
//! spelling and a bearer token. The session is persisted only when the role
//! is one the app can route. Every failure, network included, collapses into
//! one auto-dismissed banner.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::role::Role;
use common::requests::SignInResponse;

use crate::api::{auth, ApiError};
use crate::components::error_alert::ErrorAlert;
use crate::components::loading::loading_overlay;
use crate::routes::{landing_route, Route};
use crate::session::{self, Session};
use crate::validate::{validate, FormDraft, Rule};

const INVALID_CREDENTIALS: &str = "Credenciales inválidas. Verifica tu correo y contraseña.";
const UNRECOGNIZED_ROLE: &str = "Rol desconocido. Contacta al administrador.";

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<Route>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Done(Result<SignInResponse, ApiError>),
    ClearError,
}

pub struct Login {
    email: String,
    password: String,
    error: Option<String>,
    loading: bool,
}

impl Component for Login {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Login {
            email: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                let draft = FormDraft::from([
                    ("email".to_string(), self.email.clone()),
                    ("password".to_string(), self.password.clone()),
                ]);
                let rules = [
                    Rule::Required {
                        field: "email",
                        message: "El correo electrónico es obligatorio.",
                    },
                    Rule::Email { field: "email" },
                    Rule::Required {
                        field: "password",
                        message: "La contraseña es obligatoria.",
                    },
                ];
                if let Err(message) = validate(&draft, &rules) {
                    self.error = Some(message);
                    return true;
                }
                self.loading = true;
                let email = self.email.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = auth::sign_in(&email, &password).await;
                    link.send_message(Msg::Done(result));
                });
                true
            }
            Msg::Done(Ok(response)) => {
                self.loading = false;
                match Role::parse(&response.role) {
                    Some(role) => {
                        session::save(&Session {
                            token: response.token,
                            role,
                        });
                        ctx.props().on_login.emit(landing_route(role));
                        false
                    }
                    None => {
                        // Defensive: a correct backend never sends this.
                        // Nothing is persisted for a role we cannot route.
                        self.error = Some(UNRECOGNIZED_ROLE.to_string());
                        true
                    }
                }
            }
            Msg::Done(Err(_)) => {
                self.loading = false;
                self.error = Some(INVALID_CREDENTIALS.to_string());
                true
            }
            Msg::ClearError => {
                self.error = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="login-page">
                <div class="login-card">
                    <h1>{ "Iniciar Sesión" }</h1>
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
                    <form onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>
                        <div class="form-field">
                            <label>{ "Correo" }</label>
                            <input
                                type="email"
                                placeholder="Ingrese su correo"
                                value={self.email.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                    Msg::SetEmail(value)
                                })}
                            />
                        </div>
                        <div class="form-field">
                            <label>{ "Contraseña" }</label>
                            <input
                                type="password"
                                placeholder="Ingrese su contraseña"
                                value={self.password.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                    Msg::SetPassword(value)
                                })}
                            />
                        </div>
                        <button type="submit" class="btn-primary wide">
                            { "Entrar" }
                        </button>
                    </form>
                </div>
                { if self.loading { loading_overlay() } else { html! {} } }
            </div>
        }
    }
}
