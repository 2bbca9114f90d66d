pub enum Msg {
    SetName(String),
    SelectCategory(String),
    UpdateField { name: String, value: String },
    Submit,
}
