use yew::prelude::*;

use common::routes::Route;
use common::session::SessionState;

use crate::card_grid::CardGrid;

#[derive(Properties, PartialEq, Clone)]
pub struct HomeProps {
    pub session: SessionState,
    pub on_navigate: Callback<Route>,
}

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Home
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(user) = props.session.user() else {
            return html! {
                <div class="welcome">
                    <h1>{ "Welcome to " }<span class="accent">{ "Asset Management" }</span></h1>
                    <p>{ "Please login or register to access the platform" }</p>
                </div>
            };
        };

        let capabilities = props.session.capabilities();
        let (assets_title, assets_text, assets_action, assets_route) = if capabilities.view_my_assets {
            ("My Assets", "Manage your listed assets", "View My Assets", Route::MyAssets)
        } else {
            ("Assets", "Browse available assets", "Browse Assets", Route::Assets)
        };

        html! {
            <div class="page">
                <h1>{ "Welcome back, " }<span class="accent">{ user.username.clone() }</span>{ "!" }</h1>
                <CardGrid>
                    if capabilities.view_categories {
                        { welcome_card("Categories", "Manage asset categories and types", "View Categories", Route::Categories, &props.on_navigate) }
                    }
                    { welcome_card(assets_title, assets_text, assets_action, assets_route, &props.on_navigate) }
                </CardGrid>
            </div>
        }
    }
}

fn welcome_card(title: &str, text: &str, action: &str, route: Route, on_navigate: &Callback<Route>) -> Html {
    html! {
        <div class="card">
            <h2 class="card-title">{ title.to_string() }</h2>
            <p>{ text.to_string() }</p>
            <div class="card-actions">
                <button class="btn small" onclick={on_navigate.reform(move |_| route)}>{ action.to_string() }</button>
            </div>
        </div>
    }
}
