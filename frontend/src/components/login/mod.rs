use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::AppError;
use common::requests::LoginResponse;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    /// Receives the issued tokens; the root view stores them and loads the identity.
    pub on_login: Callback<LoginResponse>,
}

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Finished(Result<LoginResponse, AppError>),
}

pub struct LoginComponent {
    username: String,
    password: String,
    error: Option<&'static str>,
    submitting: bool,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            error: None,
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                self.error = None;
                self.submitting = true;

                let username = self.username.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = ApiClient::new(None).login(&username, &password).await;
                    link.send_message(Msg::Finished(result));
                });
                true
            }
            Msg::Finished(Ok(response)) => {
                self.submitting = false;
                ctx.props().on_login.emit(response);
                true
            }
            Msg::Finished(Err(err)) => {
                gloo_console::error!(format!("Failed to login: {err}"));
                self.submitting = false;
                self.error = Some("Invalid username or password");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="login">
                <h2>{ "Sign in to your account" }</h2>
                <form
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <input
                        id="username"
                        name="username"
                        type="text"
                        required=true
                        placeholder="Username"
                        value={self.username.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetUsername(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <input
                        id="password"
                        name="password"
                        type="password"
                        required=true
                        placeholder="Password"
                        value={self.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    if let Some(error) = self.error {
                        <div class="form-error">{ error }</div>
                    }
                    <button type="submit" class="btn wide" disabled={self.submitting}>
                        { "Sign in" }
                    </button>
                </form>
            </div>
        }
    }
}
