use yew::prelude::*;

use common::model::asset::Asset;

use crate::card_grid::CardGrid;

#[derive(Properties, PartialEq)]
pub struct AssetListProps {
    pub assets: Vec<Asset>,
    /// Shows the edit/delete actions. Presentation only; the API decides.
    #[prop_or_default]
    pub can_edit: bool,
    #[prop_or_default]
    pub on_edit: Option<Callback<Asset>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<Asset>>,
}

pub struct AssetList;

impl Component for AssetList {
    type Message = ();
    type Properties = AssetListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AssetList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.assets.is_empty() {
            return html! { <div class="empty-state">{ "No assets found" }</div> };
        }

        html! {
            <CardGrid>
                { for props.assets.iter().map(|asset| asset_card(asset, props)) }
            </CardGrid>
        }
    }
}

fn asset_card(asset: &Asset, props: &AssetListProps) -> Html {
    html! {
        <div class="card" key={asset.id.clone()}>
            <div class="card-header">
                <h3 class="card-title">{ asset.name.clone() }</h3>
                <p class="card-description">
                    { format!("Category: {}", asset.category_name()) }
                    if let Some(vendor) = &asset.vendor_name {
                        { format!(" | Vendor: {vendor}") }
                    }
                </p>
            </div>
            <div class="card-content">
                { for asset.fields.iter().map(|field| html! {
                    <div class="field-line" key={field.id.clone()}>
                        <span class="field-label">{ format!("{}:", field.display_label()) }</span>
                        <span class="field-value">{ field.value.clone() }</span>
                    </div>
                }) }
            </div>
            if props.can_edit {
                <div class="card-footer">
                    if let Some(on_edit) = &props.on_edit {
                        <button class="btn outline small" onclick={action(on_edit, asset)}>
                            { "Edit" }
                        </button>
                    }
                    if let Some(on_delete) = &props.on_delete {
                        <button class="btn outline small" onclick={action(on_delete, asset)}>
                            { "Delete" }
                        </button>
                    }
                </div>
            }
        </div>
    }
}

fn action(callback: &Callback<Asset>, asset: &Asset) -> Callback<MouseEvent> {
    let asset = asset.clone();
    callback.reform(move |_| asset.clone())
}
