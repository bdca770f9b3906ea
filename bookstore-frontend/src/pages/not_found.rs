use leptos::*;

use bookstore_app::Page;

use crate::components::href;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <section>
        <h1>"Page not found"</h1>
        <a href=href(Page::Home)>"Back to the start page"</a>
      </section>
    }
}
