use common::form::AssetDraft;
use common::model::asset::Asset;

/// State of the asset editor: only the transient draft.
pub struct AssetFormComponent {
    pub draft: AssetDraft,
}

impl AssetFormComponent {
    pub fn new(existing: Option<&Asset>) -> Self {
        Self {
            draft: AssetDraft::render(existing),
        }
    }
}
