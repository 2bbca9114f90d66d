//! Asset editor: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic and view rendering.
//!
//! The form knows nothing about any particular category. It receives the
//! known categories and the asset being edited (if any) as props, keeps an
//! [`AssetDraft`](common::form::AssetDraft) and hands the serialized
//! submission to its parent, which talks to the API.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AssetFormProps;
pub use state::AssetFormComponent;

impl Component for AssetFormComponent {
    type Message = Msg;
    type Properties = AssetFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        AssetFormComponent::new(ctx.props().asset.as_ref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    /// A different asset starts a fresh draft; new category data alone keeps it.
    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().asset != old_props.asset {
            *self = AssetFormComponent::new(ctx.props().asset.as_ref());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
