use yew::prelude::*;

use common::routes::Route;
use common::session::SessionState;

#[derive(Properties, PartialEq, Clone)]
pub struct NavigationProps {
    pub session: SessionState,
    pub current: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

/// Top bar. Links follow the signed-in user's capabilities.
pub struct Navigation;

impl Component for Navigation {
    type Message = ();
    type Properties = NavigationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navigation
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = |route: Route, label: &'static str| {
            let class = classes!("nav-link", (props.current == route).then_some("active"));
            html! {
                <li>
                    <a class={class} href={route.path()} onclick={props.on_navigate.reform(move |e: MouseEvent| {
                        e.prevent_default();
                        route
                    })}>
                        { label }
                    </a>
                </li>
            }
        };

        let user = props.session.user();
        let capabilities = props.session.capabilities();

        html! {
            <nav class="navbar">
                <div class="navbar-start">
                    <ul>{ link(Route::Home, "Asset Management") }</ul>
                </div>
                if user.is_some() {
                    <ul class="navbar-center">
                        { link(Route::Home, "Home") }
                        if capabilities.view_categories {
                            { link(Route::Categories, "Categories") }
                        }
                        if capabilities.view_my_assets {
                            { link(Route::MyAssets, "My Assets") }
                        }
                        { link(Route::Assets, "Assets") }
                        if capabilities.manage_users {
                            { link(Route::Users, "Users") }
                        }
                    </ul>
                }
                <div class="navbar-end">
                    if let Some(user) = user {
                        <span class="greeting">{ format!("Welcome, {}", user.username) }</span>
                        <button class="btn ghost small" onclick={props.on_logout.reform(|_| ())}>
                            { "Logout" }
                        </button>
                    } else {
                        <ul>{ link(Route::Login, "Login") }</ul>
                    }
                </div>
            </nav>
        }
    }
}
