//! Asset collection view.
//!
//! Fetches its own snapshot of assets and categories on mount. Deletes are
//! applied to the local snapshot as soon as the API confirms them; creates
//! and updates trigger a re-fetch. Nothing is shared with other views.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::collection::Collection;
use common::error::AppError;
use common::model::asset::Asset;
use common::model::category::Category;
use common::requests::AssetSubmission;
use common::session::SessionState;

use crate::api::ApiClient;
use crate::helpers::{report_failure, show_toast, Tone};
use crate::tops_sheet::top_sheet::TopSheet;

use super::form::AssetFormComponent;
use super::list::AssetList;

/// Which assets the page lists.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AssetScope {
    All,
    /// The signed-in vendor's own assets.
    Mine,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AssetsPageProps {
    pub session: SessionState,
    pub on_unauthorized: Callback<()>,
    pub scope: AssetScope,
}

pub enum Msg {
    Fetch,
    Loaded(Result<(Vec<Asset>, Vec<Category>), AppError>),
    OpenCreate,
    Edit(Asset),
    CloseForm,
    Submit(AssetSubmission),
    Saved(Result<(), AppError>),
    Delete(Asset),
    Deleted(String, Result<(), AppError>),
}

pub struct AssetsPage {
    assets: Collection<Asset>,
    categories: Vec<Category>,
    loading: bool,
    form_open: bool,
    editing: Option<Asset>,
}

impl Component for AssetsPage {
    type Message = Msg;
    type Properties = AssetsPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            assets: Collection::default(),
            categories: Vec::new(),
            loading: true,
            form_open: false,
            editing: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        // The vendor page reports failures to the user, the shared page only logs them.
        let notify = props.scope == AssetScope::Mine;

        match msg {
            Msg::Fetch => {
                let client = ApiClient::for_session(&props.session);
                let scope = props.scope;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let assets = match scope {
                        AssetScope::All => client.assets().await,
                        AssetScope::Mine => client.my_assets().await,
                    };
                    let result = match assets {
                        Ok(assets) => client.categories().await.map(|c| (assets, c)),
                        Err(err) => Err(err),
                    };
                    link.send_message(Msg::Loaded(result));
                });
                false
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok((assets, categories)) => {
                        self.assets.replace_all(assets);
                        self.categories = categories;
                    }
                    Err(err) => report_failure("load assets", &err, notify, &props.on_unauthorized),
                }
                true
            }
            Msg::OpenCreate => {
                self.editing = None;
                self.form_open = true;
                true
            }
            Msg::Edit(asset) => {
                self.editing = Some(asset);
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
                let asset_id = self.editing.as_ref().map(|a| a.id.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match asset_id {
                        Some(id) => client.update_asset(&id, &submission).await,
                        None => client.create_asset(&submission).await,
                    };
                    link.send_message(Msg::Saved(result));
                });
                false
            }
            Msg::Saved(Ok(())) => {
                let updated = self.editing.take().is_some();
                self.form_open = false;
                if notify {
                    let verb = if updated { "updated" } else { "created" };
                    show_toast(&format!("Asset {verb} successfully"), Tone::Info);
                }
                ctx.link().send_message(Msg::Fetch);
                true
            }
            Msg::Saved(Err(err)) => {
                report_failure("save asset", &err, notify, &props.on_unauthorized);
                false
            }
            Msg::Delete(asset) => {
                let client = ApiClient::for_session(&props.session);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = client.delete_asset(&asset.id).await;
                    link.send_message(Msg::Deleted(asset.id, result));
                });
                false
            }
            Msg::Deleted(id, Ok(())) => self.assets.remove(&id),
            Msg::Deleted(_, Err(err)) => {
                report_failure("delete asset", &err, false, &props.on_unauthorized);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="loading">{ "Loading..." }</div> };
        }

        let props = ctx.props();
        let link = ctx.link();
        let can_edit = props.session.capabilities().edit_assets;
        let title = match props.scope {
            AssetScope::All => "Assets",
            AssetScope::Mine => "My Assets",
        };
        let sheet_title = if self.editing.is_some() {
            "Edit Asset"
        } else {
            "Create New Asset"
        };

        html! {
            <div class="page">
                <div class="page-header">
                    <h1>{ title }</h1>
                    if can_edit {
                        <button class="btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                            { "Create Asset" }
                        </button>
                    }
                </div>

                <TopSheet
                    open={self.form_open}
                    title={sheet_title}
                    subtitle={Some(AttrValue::from("Select a category and fill in the required information"))}
                    on_close={link.callback(|_| Msg::CloseForm)}
                >
                    <AssetFormComponent
                        categories={self.categories.clone()}
                        asset={self.editing.clone()}
                        on_submit={link.callback(Msg::Submit)}
                        on_cancel={Some(link.callback(|_| Msg::CloseForm))}
                    />
                </TopSheet>

                <AssetList
                    assets={self.assets.items().to_vec()}
                    {can_edit}
                    on_edit={Some(link.callback(Msg::Edit))}
                    on_delete={Some(link.callback(Msg::Delete))}
                />
            </div>
        }
    }
}
