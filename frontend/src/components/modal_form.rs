//! Generic create/edit modal driven by a field descriptor table.
//!
//! Pages declare `Vec<Field>` plus an initial draft; the modal renders the
//! matching controls, keeps the draft updated, enforces the blanket
//! required-field check inline, and hands the draft back on submit. Shape
//! rules (email, phone, password) stay with the page, which runs its own
//! rule table before calling the backend.

use std::collections::HashMap;

use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::validate::FormDraft;

/// Control variant for one field. Each kind carries only what that kind
/// needs, so the renderer can match exhaustively.
#[derive(Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Select { options: Vec<&'static str> },
}

#[derive(Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Field {
        Field { name, label, placeholder, kind: FieldKind::Text }
    }

    pub fn email(name: &'static str, label: &'static str, placeholder: &'static str) -> Field {
        Field { name, label, placeholder, kind: FieldKind::Email }
    }

    pub fn password(name: &'static str, label: &'static str, placeholder: &'static str) -> Field {
        Field { name, label, placeholder, kind: FieldKind::Password }
    }

    pub fn select(name: &'static str, label: &'static str, options: Vec<&'static str>) -> Field {
        Field { name, label, placeholder: "", kind: FieldKind::Select { options } }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalFormProps {
    pub title: AttrValue,
    pub fields: Vec<Field>,
    pub initial: FormDraft,
    #[prop_or(AttrValue::Static("Guardar"))]
    pub submit_label: AttrValue,
    pub on_submit: Callback<FormDraft>,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Edit(&'static str, String),
    Submit,
}

pub struct ModalForm {
    id: String,
    draft: FormDraft,
    errors: HashMap<&'static str, &'static str>,
}

impl Component for ModalForm {
    type Message = Msg;
    type Properties = ModalFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut draft = ctx.props().initial.clone();
        // Selects preload their first option so an untouched select still
        // submits a value.
        for field in &ctx.props().fields {
            if let FieldKind::Select { options } = &field.kind {
                let empty = draft
                    .get(field.name)
                    .map(|value| value.is_empty())
                    .unwrap_or(true);
                if empty {
                    if let Some(first) = options.first() {
                        draft.insert(field.name.to_string(), first.to_string());
                    }
                }
            }
        }
        ModalForm {
            id: format!("id-{}", Uuid::new_v4()),
            draft,
            errors: HashMap::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(name, value) => {
                self.errors.remove(name);
                self.draft.insert(name.to_string(), value);
                true
            }
            Msg::Submit => {
                self.errors.clear();
                for field in &ctx.props().fields {
                    let blank = self
                        .draft
                        .get(field.name)
                        .map(|value| value.trim().is_empty())
                        .unwrap_or(true);
                    if blank {
                        self.errors.insert(field.name, "Este campo es requerido");
                    }
                }
                if self.errors.is_empty() {
                    ctx.props().on_submit.emit(self.draft.clone());
                    false
                } else {
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_close = ctx.props().on_close.clone();
        html! {
            <div class="modal-overlay" id={self.id.clone()}>
                <div class="modal-card">
                    <div class="modal-head">
                        <h2>{ ctx.props().title.clone() }</h2>
                        <button
                            class="modal-close"
                            onclick={Callback::from(move |_| on_close.emit(()))}
                        >
                            { "×" }
                        </button>
                    </div>
                    <form onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>
                        { for ctx.props().fields.iter().map(|field| self.render_field(ctx, field)) }
                        <div class="modal-actions">
                            <button
                                type="button"
                                class="btn-secondary"
                                onclick={{
                                    let on_close = ctx.props().on_close.clone();
                                    Callback::from(move |_| on_close.emit(()))
                                }}
                            >
                                { "Cancelar" }
                            </button>
                            <button type="submit" class="btn-primary">
                                { ctx.props().submit_label.clone() }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}

impl ModalForm {
    fn render_field(&self, ctx: &Context<Self>, field: &Field) -> Html {
        let link = ctx.link();
        let name = field.name;
        let value = self.draft.get(name).cloned().unwrap_or_default();
        let control = match &field.kind {
            FieldKind::Select { options } => {
                let current = value.clone();
                html! {
                    <select
                        name={name}
                        onchange={link.callback(move |e: Event| {
                            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                            Msg::Edit(name, value)
                        })}
                    >
                        {
                            options.iter().map(|option| html! {
                                <option value={*option} selected={current == *option}>
                                    { *option }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                }
            }
            kind => {
                let input_type = match kind {
                    FieldKind::Email => "email",
                    FieldKind::Password => "password",
                    _ => "text",
                };
                html! {
                    <input
                        type={input_type}
                        name={name}
                        placeholder={field.placeholder}
                        value={value}
                        oninput={link.callback(move |e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlInputElement>().value();
                            Msg::Edit(name, value)
                        })}
                    />
                }
            }
        };
        html! {
            <div class="form-field">
                <label>{ field.label }</label>
                { control }
                {
                    if let Some(message) = self.errors.get(name) {
                        html! { <span class="field-error">{ *message }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
