//! View rendering for the asset editor.
//!
//! The dependent fields come from [`AssetDraft::controls`](common::form::AssetDraft::controls):
//! one row per schema field, the widget picked by an exhaustive match on
//! [`Widget`]. Required fields rely on the browser's own constraint
//! validation, which blocks the submit event before `Msg::Submit` is sent.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::form::{FieldControl, Widget};

use super::messages::Msg;
use super::state::AssetFormComponent;

pub fn view(component: &AssetFormComponent, ctx: &Context<AssetFormComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let draft = &component.draft;
    let controls = draft.controls(&props.categories);

    html! {
        <form
            class="asset-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <div class="form-row">
                <label for="asset-name">{ "Name" }</label>
                <input
                    id="asset-name"
                    type="text"
                    required=true
                    value={draft.name().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>

            { build_category_select(component, ctx) }

            <div class="dynamic-fields">
                { for controls.iter().map(|control| build_field_row(control, link)) }
            </div>

            <div class="form-actions">
                if let Some(on_cancel) = &props.on_cancel {
                    <button type="button" class="btn outline" onclick={on_cancel.reform(|_| ())}>
                        { "Cancel" }
                    </button>
                }
                <button type="submit" class="btn">
                    { if draft.is_editing() { "Save Changes" } else { "Create Asset" } }
                </button>
            </div>
        </form>
    }
}

/// Category picker, disabled while editing.
fn build_category_select(component: &AssetFormComponent, ctx: &Context<AssetFormComponent>) -> Html {
    let draft = &component.draft;
    let selected = draft.category_id();

    html! {
        <div class="form-row">
            <label for="asset-category">{ "Category" }</label>
            <select
                id="asset-category"
                required=true
                disabled={draft.category_locked()}
                onchange={ctx.link().callback(|e: Event| {
                    Msg::SelectCategory(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value="" disabled=true selected={selected.is_none()}>
                    { "Select category" }
                </option>
                { for ctx.props().categories.iter().map(|category| html! {
                    <option
                        value={category.id.clone()}
                        selected={selected == Some(category.id.as_str())}
                    >
                        { category.name.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn build_field_row(control: &FieldControl, link: &Scope<AssetFormComponent>) -> Html {
    let id = format!("field-{}", control.name);
    let name = control.name.clone();

    let input = match &control.widget {
        Widget::Choice(options) => {
            let onchange = link.callback(move |e: Event| Msg::UpdateField {
                name: name.clone(),
                value: e.target_unchecked_into::<HtmlSelectElement>().value(),
            });
            html! {
                <select id={id.clone()} required={control.required} {onchange}>
                    <option value="" disabled=true selected={control.value.is_empty()}>
                        { format!("Select {}", control.label) }
                    </option>
                    { for options.iter().map(|option| html! {
                        <option value={option.clone()} selected={&control.value == option}>
                            { option.clone() }
                        </option>
                    }) }
                </select>
            }
        }
        widget @ (Widget::Text | Widget::Number | Widget::Date) => {
            let oninput = link.callback(move |e: InputEvent| Msg::UpdateField {
                name: name.clone(),
                value: e.target_unchecked_into::<HtmlInputElement>().value(),
            });
            html! {
                <input
                    id={id.clone()}
                    type={widget.input_type()}
                    required={control.required}
                    value={control.value.clone()}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class="form-row">
            <label for={id}>{ control.label.clone() }</label>
            { input }
        </div>
    }
}
