//! Root view: owns the session, the credential store and the current route.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use common::error::AppError;
use common::model::user::User;
use common::requests::LoginResponse;
use common::routes::{Resolution, Route};
use common::session::{Credentials, SessionState};

use crate::api::ApiClient;
use crate::components::assets::{AssetScope, AssetsPage};
use crate::components::categories::CategoriesPage;
use crate::components::home::Home;
use crate::components::login::LoginComponent;
use crate::components::navigation::Navigation;
use crate::components::users::UsersPage;
use crate::helpers::{current_route, push_route};
use crate::storage::BrowserStore;

pub enum Msg {
    /// Identity lookup for the given token.
    IdentityLoaded(String, Result<User, AppError>),
    LoggedIn(LoginResponse),
    Navigate(Route),
    RouteChanged(Route),
    Logout,
    Unauthorized,
}

pub struct App {
    session: SessionState,
    store: BrowserStore,
    route: Route,
    popstate: Option<Closure<dyn Fn()>>,
}

impl App {
    fn load_identity(link: &Scope<Self>, token: &str) {
        let client = ApiClient::new(Some(token));
        let token = token.to_string();
        let link = link.clone();
        spawn_local(async move {
            let result = client.me().await;
            link.send_message(Msg::IdentityLoaded(token, result));
        });
    }

    fn listen_for_history(link: &Scope<Self>) -> Option<Closure<dyn Fn()>> {
        let window = web_sys::window()?;
        let link = link.clone();
        let closure = Closure::<dyn Fn()>::new(move || {
            link.send_message(Msg::RouteChanged(current_route()));
        });
        window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(closure)
    }

    fn page(&self, ctx: &Context<Self>, route: Route) -> Html {
        let link = ctx.link();
        let session = self.session.clone();
        let on_unauthorized = link.callback(|_| Msg::Unauthorized);

        match route {
            Route::Home => html! { <Home key={route.path()} {session} on_navigate={link.callback(Msg::Navigate)} /> },
            Route::Login => html! { <LoginComponent key={route.path()} on_login={link.callback(Msg::LoggedIn)} /> },
            Route::Assets => html! {
                <AssetsPage key={route.path()} {session} {on_unauthorized} scope={AssetScope::All} />
            },
            Route::MyAssets => html! {
                <AssetsPage key={route.path()} {session} {on_unauthorized} scope={AssetScope::Mine} />
            },
            Route::Categories => html! { <CategoriesPage key={route.path()} {session} {on_unauthorized} /> },
            Route::Users => html! { <UsersPage key={route.path()} {session} {on_unauthorized} /> },
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let store = BrowserStore;
        let mut session = SessionState::new();
        if let Some(token) = session.begin(&store) {
            store.touch_cookie(&token);
            Self::load_identity(ctx.link(), &token);
        }

        Self {
            session,
            store,
            route: current_route(),
            popstate: Self::listen_for_history(ctx.link()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Results for a token the session no longer holds are dropped.
            Msg::IdentityLoaded(token, Ok(user)) => return self.session.identity_resolved(&token, user),
            Msg::IdentityLoaded(token, Err(err)) => {
                if !self.session.identity_rejected(&token, &mut self.store) {
                    return false;
                }
                gloo_console::error!(format!("Failed to load current user: {err}"));
            }
            Msg::LoggedIn(response) => {
                let credentials = Credentials {
                    access: response.access,
                    refresh: Some(response.refresh),
                };
                self.session.login(&credentials, &mut self.store);
                Self::load_identity(ctx.link(), &credentials.access);
                push_route(Route::Home);
                self.route = Route::Home;
            }
            Msg::Navigate(route) => {
                if route == self.route {
                    return false;
                }
                push_route(route);
                self.route = route;
            }
            Msg::RouteChanged(route) => self.route = route,
            Msg::Logout => {
                self.session.logout(&mut self.store);
                push_route(Route::Login);
                self.route = Route::Login;
            }
            Msg::Unauthorized => self.session.unauthorized(&mut self.store),
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Resolution::Redirect(target) = self.route.resolve(&self.session) {
            ctx.link().send_message(Msg::Navigate(target));
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(closure), Some(window)) = (self.popstate.take(), web_sys::window()) {
            window
                .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .ok();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let content = match self.route.resolve(&self.session) {
            Resolution::Wait => html! { <div class="loading">{ "Loading..." }</div> },
            Resolution::Render(route) => self.page(ctx, route),
            Resolution::Redirect(_) => html! {},
        };

        html! {
            <>
                <Navigation
                    session={self.session.clone()}
                    current={self.route}
                    on_navigate={link.callback(Msg::Navigate)}
                    on_logout={link.callback(|_| Msg::Logout)}
                />
                <main class="container">{ content }</main>
            </>
        }
    }
}
