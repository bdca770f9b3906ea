use futures::channel::mpsc;
use leptos::*;
use wasm_bindgen::JsValue;

use bookstore_app::{parse_route, Mdl, Msg, Page, Runtime};

mod browser;
mod components;
mod pages;

use self::{browser::*, components::*, pages::*};

const DEFAULT_API_URL: &str = "/api";

/// Global variable that contains the state rendered on the server.
const INIT_MODEL_VAR: &str = "__INIT_MODEL__";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let url = window().location().href().unwrap_or_default();
    let initial_state = initial_state();

    let runtime = Runtime::start(
        &url,
        initial_state.as_deref(),
        LocalStorage,
        HttpApi::new(DEFAULT_API_URL.to_string()),
        HashNavigator,
    );

    // -- signals -- //

    let mdl = RwSignal::new(runtime.model().clone());
    let page = create_memo(move |_| mdl.with(|mdl| mdl.page.page()));

    // -- message loop -- //

    let (tx, rx) = mpsc::unbounded();
    let dispatch = Callback::new(move |msg: Msg| {
        if let Err(err) = tx.unbounded_send(msg) {
            log::error!("Unable to dispatch message: {err}");
        }
    });
    spawn_local(runtime.run(rx, move |next: &Mdl| {
        if mdl.with_untracked(|mdl| mdl != next) {
            mdl.set(next.clone());
        }
    }));

    // -- history -- //

    _ = window_event_listener(ev::hashchange, move |_| {
        let url = window().location().href().unwrap_or_default();
        dispatch.call(Msg::RouteChanged(parse_route(&url)));
    });

    view! {
      <NavBar mdl dispatch />
      <main>
      {
        move || match page.get() {
            Page::Home => view! { <Home mdl /> }.into_view(),
            Page::Login => view! { <Login mdl dispatch /> }.into_view(),
            Page::WishList => view! { <WishList mdl dispatch /> }.into_view(),
            Page::NotFound => view! { <NotFound /> }.into_view(),
        }
      }
      </main>
    }
}

fn initial_state() -> Option<String> {
    let value = js_sys::Reflect::get(&window(), &JsValue::from_str(INIT_MODEL_VAR)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value.as_string().or_else(|| {
        js_sys::JSON::stringify(&value)
            .ok()
            .and_then(|json| json.as_string())
    })
}
