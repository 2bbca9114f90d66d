//! Admin-only user directory.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::collection::Collection;
use common::error::AppError;
use common::model::user::User;

use crate::api::ApiClient;
use crate::card_grid::CardGrid;
use crate::components::PageProps;
use crate::helpers::report_failure;

pub enum Msg {
    Loaded(Result<Vec<User>, AppError>),
    Delete(String),
    Deleted(String, Result<(), AppError>),
}

pub struct UsersPage {
    users: Collection<User>,
    loading: bool,
}

impl Component for UsersPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let client = ApiClient::for_session(&ctx.props().session);
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(client.users().await));
        });

        Self {
            users: Collection::default(),
            loading: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(users) => self.users.replace_all(users),
                    Err(err) => report_failure("load users", &err, false, &props.on_unauthorized),
                }
                true
            }
            Msg::Delete(id) => {
                let client = ApiClient::for_session(&props.session);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = client.delete_user(&id).await;
                    link.send_message(Msg::Deleted(id, result));
                });
                false
            }
            Msg::Deleted(id, Ok(())) => self.users.remove(&id),
            Msg::Deleted(_, Err(err)) => {
                report_failure("delete user", &err, false, &props.on_unauthorized);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="loading">{ "Loading..." }</div> };
        }

        let link = ctx.link();
        let me = ctx.props().session.user().map(|u| u.id.clone());

        html! {
            <div class="page">
                <div class="page-header">
                    <h1>{ "Users" }</h1>
                </div>
                <CardGrid>
                    { for self.users.items().iter().map(|user| {
                        let id = user.id.clone();
                        let is_self = me.as_deref() == Some(user.id.as_str());
                        html! {
                            <div class="card" key={user.id.clone()}>
                                <div class="card-header">
                                    <h3 class="card-title">{ user.username.clone() }</h3>
                                    <p class="card-description">{ user.role.as_str() }</p>
                                </div>
                                <div class="card-content">
                                    if let Some(company) = user.company() {
                                        <div class="field-line">
                                            <span class="field-label">{ "Company" }</span>
                                            <span class="field-value">{ company.to_string() }</span>
                                        </div>
                                    }
                                    if !is_self {
                                        <button
                                            class="btn outline small"
                                            onclick={link.callback(move |_| Msg::Delete(id.clone()))}
                                        >
                                            { "Delete" }
                                        </button>
                                    }
                                </div>
                            </div>
                        }
                    }) }
                </CardGrid>
            </div>
        }
    }
}
