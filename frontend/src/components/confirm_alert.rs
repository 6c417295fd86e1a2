use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmAlertProps {
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Sí, eliminar"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Blocking confirmation dialog. Clicking outside the card cancels, same as
/// the cancel button.
pub struct ConfirmAlert;

impl Component for ConfirmAlert {
    type Message = ();
    type Properties = ConfirmAlertProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConfirmAlert
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_cancel = ctx.props().on_cancel.clone();
        let on_cancel_btn = ctx.props().on_cancel.clone();
        let on_confirm = ctx.props().on_confirm.clone();
        html! {
            <div
                class="modal-overlay"
                onclick={Callback::from(move |_| on_cancel.emit(()))}
            >
                <div
                    class="confirm-card"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <h3>{ ctx.props().message.clone() }</h3>
                    <div class="modal-actions">
                        <button
                            class="btn-secondary"
                            onclick={Callback::from(move |_| on_cancel_btn.emit(()))}
                        >
                            { "Cancelar" }
                        </button>
                        <button
                            class="btn-danger"
                            onclick={Callback::from(move |_| on_confirm.emit(()))}
                        >
                            { ctx.props().confirm_label.clone() }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
