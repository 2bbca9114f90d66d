use yew::{classes, html, AttrValue, Callback, Component, Context, Html, Properties};

/// Sheet sliding over the page, used to host the create/edit forms.
pub struct TopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let on_close = props.on_close.reform(|_| ());

        html! {
            <div class={classes!("top-sheet", "show")}>
                <div class="top-sheet-header">
                    <div>
                        <h2>{ props.title.clone() }</h2>
                        if let Some(subtitle) = &props.subtitle {
                            <p class="top-sheet-subtitle">{ subtitle.clone() }</p>
                        }
                    </div>
                    <button type="button" class="icon-btn" title="Close" onclick={on_close}>
                        { "✕" }
                    </button>
                </div>
                <div class="top-sheet-body">
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
