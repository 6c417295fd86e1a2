use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct TableProps {
    pub headers: Vec<AttrValue>,
    /// Prebuilt `<tr>` rows. The page owns cell rendering, including the
    /// action buttons, so this component stays purely presentational.
    #[prop_or_default]
    pub children: Html,
}

/// Listing table shared by every management page.
pub struct Table;

impl Component for Table {
    type Message = ();
    type Properties = TableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Table
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="table-wrap">
                <table class="listing-table">
                    <thead>
                        <tr>
                            {
                                ctx.props().headers.iter().map(|header| html! {
                                    <th>{ header.clone() }</th>
                                }).collect::<Html>()
                            }
                        </tr>
                    </thead>
                    <tbody>
                        { ctx.props().children.clone() }
                    </tbody>
                </table>
            </div>
        }
    }
}
