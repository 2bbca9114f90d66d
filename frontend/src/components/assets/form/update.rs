use yew::prelude::*;

use crate::helpers::{show_toast, Tone};

use super::messages::Msg;
use super::state::AssetFormComponent;

pub fn update(component: &mut AssetFormComponent, ctx: &Context<AssetFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetName(name) => {
            component.draft.set_name(name);
            true
        }
        // Refused while editing; nothing to redraw then.
        Msg::SelectCategory(category_id) => component.draft.select_category(category_id),
        Msg::UpdateField { name, value } => {
            component.draft.input(&name, value);
            true
        }
        Msg::Submit => {
            match component.draft.serialize() {
                Ok(submission) => ctx.props().on_submit.emit(submission),
                Err(err) => show_toast(&err.to_string(), Tone::Error),
            }
            false
        }
    }
}
