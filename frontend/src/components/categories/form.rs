//! Schema editor for a single category.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::form::CategoryDraft;
use common::model::category::{Category, FieldType};
use common::requests::{CategorySubmission, FieldDefinition};

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryFormProps {
    #[prop_or_default]
    pub category: Option<Category>,
    pub on_submit: Callback<CategorySubmission>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

pub enum Msg {
    SetName(String),
    AddField,
    RemoveField(usize),
    SetFieldName(usize, String),
    SetFieldLabel(usize, String),
    SetFieldType(usize, String),
    SetFieldRequired(usize, bool),
    SetFieldOptions(usize, String),
    Submit,
}

pub struct CategoryFormComponent {
    draft: CategoryDraft,
}

impl CategoryFormComponent {
    fn draft_for(category: Option<&Category>) -> CategoryDraft {
        category.map_or_else(CategoryDraft::new, CategoryDraft::from_category)
    }
}

impl Component for CategoryFormComponent {
    type Message = Msg;
    type Properties = CategoryFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            draft: Self::draft_for(ctx.props().category.as_ref()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().category != old_props.category {
            self.draft = Self::draft_for(ctx.props().category.as_ref());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let draft = &mut self.draft;
        match msg {
            Msg::SetName(name) => draft.set_name(name),
            Msg::AddField => draft.add_field(),
            Msg::RemoveField(index) => draft.remove_field(index),
            Msg::SetFieldName(index, name) => draft.set_field_name(index, name),
            Msg::SetFieldLabel(index, label) => draft.set_field_label(index, label),
            Msg::SetFieldType(index, value) => match FieldType::parse(&value) {
                Some(field_type) => draft.set_field_type(index, field_type),
                None => return false,
            },
            Msg::SetFieldRequired(index, required) => draft.set_field_required(index, required),
            Msg::SetFieldOptions(index, raw) => draft.set_field_options(index, &raw),
            Msg::Submit => {
                ctx.props().on_submit.emit(draft.serialize());
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let editing = self.draft.category_id().is_some();

        html! {
            <form
                class="category-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <div class="form-row">
                    <label for="category-name">{ "Category Name" }</label>
                    <input
                        id="category-name"
                        type="text"
                        required=true
                        value={self.draft.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>

                <div class="form-section">
                    <div class="section-header">
                        <h3>{ "Form Fields" }</h3>
                        <button type="button" class="btn outline" onclick={link.callback(|_| Msg::AddField)}>
                            { "Add Field" }
                        </button>
                    </div>
                    { for self.draft.fields.iter().enumerate().map(|(index, field)| field_editor(index, field, link)) }
                </div>

                <div class="form-actions">
                    if let Some(on_cancel) = &ctx.props().on_cancel {
                        <button type="button" class="btn outline" onclick={on_cancel.reform(|_| ())}>
                            { "Cancel" }
                        </button>
                    }
                    <button type="submit" class="btn">
                        { if editing { "Update Category" } else { "Create Category" } }
                    </button>
                </div>
            </form>
        }
    }
}

fn field_editor(index: usize, field: &FieldDefinition, link: &Scope<CategoryFormComponent>) -> Html {
    let required_id = format!("required-{index}");

    html! {
        <div class="field-editor">
            <div class="section-header">
                <h4>{ format!("Field {}", index + 1) }</h4>
                <button type="button" class="btn ghost small" onclick={link.callback(move |_| Msg::RemoveField(index))}>
                    { "Remove" }
                </button>
            </div>
            <div class="field-grid">
                <div class="form-row">
                    <label>{ "Field Name" }</label>
                    <input
                        type="text"
                        required=true
                        value={field.name.clone()}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::SetFieldName(index, e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
                <div class="form-row">
                    <label>{ "Field Label" }</label>
                    <input
                        type="text"
                        required=true
                        value={field.label.clone()}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::SetFieldLabel(index, e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
                <div class="form-row">
                    <label>{ "Field Type" }</label>
                    <select
                        required=true
                        onchange={link.callback(move |e: Event| {
                            Msg::SetFieldType(index, e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        { for FieldType::ALL.iter().map(|t| html! {
                            <option value={t.as_str()} selected={*t == field.field_type}>{ t.label() }</option>
                        }) }
                    </select>
                </div>
                <div class="form-row inline">
                    <input
                        type="checkbox"
                        id={required_id.clone()}
                        checked={field.required}
                        onchange={link.callback(move |e: Event| {
                            Msg::SetFieldRequired(index, e.target_unchecked_into::<HtmlInputElement>().checked())
                        })}
                    />
                    <label for={required_id}>{ "Required Field" }</label>
                </div>
                if field.field_type == FieldType::Select {
                    <div class="form-row wide">
                        <label>{ "Options (comma separated)" }</label>
                        <input
                            type="text"
                            value={field.options.join(", ")}
                            onchange={link.callback(move |e: Event| {
                                Msg::SetFieldOptions(index, e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                }
            </div>
        </div>
    }
}
