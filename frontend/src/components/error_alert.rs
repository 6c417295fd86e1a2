use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
    /// Invoked when the banner expires; the page clears its error state.
    pub on_close: Callback<()>,
    #[prop_or(3000)]
    pub duration_ms: u32,
}

pub enum Msg {
    Expired(u32),
}

/// Auto-dismissing error banner. A generation counter ties each timer to
/// the message it was armed for, so a replaced message is not cut short by
/// the previous message's timer.
pub struct ErrorAlert {
    generation: u32,
}

impl Component for ErrorAlert {
    type Message = Msg;
    type Properties = ErrorAlertProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ErrorAlert { generation: 0 }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Expired(generation) => {
                if generation == self.generation {
                    ctx.props().on_close.emit(());
                }
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.message != ctx.props().message {
            self.generation += 1;
            arm(ctx, self.generation);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            arm(ctx, self.generation);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="alert alert-error">
                <h3>{ "Error" }</h3>
                <p>{ ctx.props().message.clone() }</p>
            </div>
        }
    }
}

fn arm(ctx: &Context<ErrorAlert>, generation: u32) {
    let link = ctx.link().clone();
    let delay = ctx.props().duration_ms;
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay).await;
        link.send_message(Msg::Expired(generation));
    });
}
