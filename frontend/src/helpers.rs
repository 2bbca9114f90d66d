//! Small browser utilities shared by the views.
//!
//! - **Feedback**: toast notifications and console logging for failed actions.
//! - **Navigation**: reading and pushing the location for the client routes.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use yew::Callback;

use common::error::AppError;
use common::routes::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum Tone {
    Info,
    Error,
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a plain `div` appended to `body` that removes itself after
/// a few seconds.
pub fn show_toast(message: &str, tone: Tone) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let background = match tone {
        Tone::Info => "rgba(0, 0, 0, 0.8)",
        Tone::Error => "rgba(198, 40, 40, 0.9)",
    };
    let style = toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            toast.remove();
        });
    }
}

/// Routes a failed action to the right place.
///
/// `Unauthorized` goes to `on_unauthorized` (the root view clears the
/// session). Anything else is logged, and toasted when `notify` is set.
pub fn report_failure(action: &str, err: &AppError, notify: bool, on_unauthorized: &Callback<()>) {
    if err.is_unauthorized() {
        on_unauthorized.emit(());
        return;
    }
    gloo_console::error!(format!("Failed to {action}: {err}"));
    if notify {
        show_toast(&format!("Failed to {action}. {err}"), Tone::Error);
    }
}

/// Route matching the current location.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

/// Pushes `route` onto the history stack without reloading.
pub fn push_route(route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
            gloo_console::error!(err);
        }
    }
}
