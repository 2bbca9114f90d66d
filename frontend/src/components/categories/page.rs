use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use common::collection::{guard_category_delete, Collection};
use common::error::AppError;
use common::model::category::Category;
use common::requests::CategorySubmission;

use crate::api::ApiClient;
use crate::card_grid::CardGrid;
use crate::components::PageProps;
use crate::helpers::{report_failure, show_toast, Tone};
use crate::tops_sheet::top_sheet::TopSheet;

use super::form::CategoryFormComponent;

pub enum Msg {
    Fetch,
    Loaded(Result<Vec<Category>, AppError>),
    OpenCreate,
    Edit(Category),
    CloseForm,
    Submit(CategorySubmission),
    Saved(Result<Category, AppError>),
    Delete(Category),
    Deleted(String, Result<(), AppError>),
}

pub struct CategoriesPage {
    categories: Collection<Category>,
    loading: bool,
    form_open: bool,
    editing: Option<Category>,
}

impl Component for CategoriesPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            categories: Collection::default(),
            loading: true,
            form_open: false,
            editing: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Fetch => {
                let client = ApiClient::for_session(&props.session);
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(client.categories().await));
                });
                false
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(categories) => self.categories.replace_all(categories),
                    Err(err) => report_failure("load categories", &err, false, &props.on_unauthorized),
                }
                true
            }
            Msg::OpenCreate => {
                self.editing = None;
                self.form_open = true;
                true
            }
            Msg::Edit(category) => {
                self.editing = Some(category);
                self.form_open = true;
                true
            }
            Msg::CloseForm => {
                self.editing = None;
                self.form_open = false;
                true
            }
            Msg::Submit(submission) => {
                let client = ApiClient::for_session(&props.session);
                let category_id = self.editing.as_ref().map(|c| c.id.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match category_id {
                        Some(id) => client.update_category(&id, &submission).await,
                        None => client.create_category(&submission).await,
                    };
                    link.send_message(Msg::Saved(result));
                });
                false
            }
            Msg::Saved(Ok(category)) => {
                self.categories.upsert(category);
                self.editing = None;
                self.form_open = false;
                true
            }
            Msg::Saved(Err(err)) => {
                report_failure("save category", &err, false, &props.on_unauthorized);
                false
            }
            Msg::Delete(category) => {
                let client = ApiClient::for_session(&props.session);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match client.assets_in_category(&category.id).await {
                        Ok(assets) => match guard_category_delete(assets.len()) {
                            Ok(()) => client.delete_category(&category.id).await,
                            Err(conflict) => Err(conflict),
                        },
                        Err(err) => Err(err),
                    };
                    link.send_message(Msg::Deleted(category.id, result));
                });
                false
            }
            Msg::Deleted(id, Ok(())) => {
                show_toast("Category deleted successfully", Tone::Info);
                self.categories.remove(&id)
            }
            Msg::Deleted(_, Err(err)) => {
                report_failure("delete category", &err, true, &props.on_unauthorized);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="loading">{ "Loading..." }</div> };
        }

        let link = ctx.link();
        let can_manage = ctx.props().session.capabilities().manage_categories;
        let sheet_title = if self.editing.is_some() {
            "Edit Category"
        } else {
            "Create New Category"
        };

        html! {
            <div class="page">
                <div class="page-header">
                    <h1>{ "Categories" }</h1>
                    if can_manage {
                        <button class="btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                            { "Create Category" }
                        </button>
                    }
                </div>

                <TopSheet
                    open={self.form_open}
                    title={sheet_title}
                    subtitle={Some(AttrValue::from("Define the fields assets in this category carry"))}
                    on_close={link.callback(|_| Msg::CloseForm)}
                >
                    <CategoryFormComponent
                        category={self.editing.clone()}
                        on_submit={link.callback(Msg::Submit)}
                        on_cancel={Some(link.callback(|_| Msg::CloseForm))}
                    />
                </TopSheet>

                if self.categories.is_empty() {
                    <div class="empty-state">{ "No categories found" }</div>
                } else {
                    <CardGrid>
                        { for self.categories.items().iter().map(|c| category_card(c, can_manage, link)) }
                    </CardGrid>
                }
            </div>
        }
    }
}

fn category_card(category: &Category, can_manage: bool, link: &Scope<CategoriesPage>) -> Html {
    let edit = category.clone();
    let delete = category.clone();

    html! {
        <div class="card" key={category.id.clone()}>
            <h3>{ category.name.clone() }</h3>
            <ul class="field-list">
                { for category.ordered_fields().into_iter().map(|field| html! {
                    <li>
                        { format!("{} ({})", field.label, field.kind.field_type().label()) }
                        if field.required {
                            <span class="required">{ " (required)" }</span>
                        }
                    </li>
                }) }
            </ul>
            if can_manage {
                <div class="card-actions">
                    <button class="btn outline small" onclick={link.callback(move |_| Msg::Edit(edit.clone()))}>
                        { "Edit" }
                    </button>
                    <button class="btn danger small" onclick={link.callback(move |_| Msg::Delete(delete.clone()))}>
                        { "Delete" }
                    </button>
                </div>
            }
        </div>
    }
}
