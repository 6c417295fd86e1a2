use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub items: Vec<AttrValue>,
    pub active: usize,
    pub on_select: Callback<usize>,
    pub on_logout: Callback<()>,
}

/// Dashboard navigation column: one entry per section plus sign-out.
pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_logout = ctx.props().on_logout.clone();
        html! {
            <div class="sidebar">
                <div class="sidebar-title">{ "Menú" }</div>
                <nav>
                    <ul>
                        {
                            ctx.props().items.iter().enumerate().map(|(index, label)| {
                                let on_select = ctx.props().on_select.clone();
                                let class = if index == ctx.props().active {
                                    "sidebar-item active"
                                } else {
                                    "sidebar-item"
                                };
                                html! {
                                    <li>
                                        <button
                                            class={class}
                                            onclick={Callback::from(move |_| on_select.emit(index))}
                                        >
                                            { label.clone() }
                                        </button>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                        <li>
                            <button
                                class="sidebar-item"
                                onclick={Callback::from(move |_| on_logout.emit(()))}
                            >
                                { "Cerrar Sesión" }
                            </button>
                        </li>
                    </ul>
                </nav>
            </div>
        }
    }
}
