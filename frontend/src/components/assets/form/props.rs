use yew::prelude::*;

use common::model::asset::Asset;
use common::model::category::Category;
use common::requests::AssetSubmission;

#[derive(Properties, PartialEq, Clone)]
pub struct AssetFormProps {
    /// Categories currently known to the page. The selected category is
    /// looked up here; when it is missing no dependent fields are shown.
    pub categories: Vec<Category>,

    /// Asset being edited. `None` creates a new one.
    #[prop_or_default]
    pub asset: Option<Asset>,

    pub on_submit: Callback<AssetSubmission>,

    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}
