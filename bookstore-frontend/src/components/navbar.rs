use leptos::*;

use bookstore_app::{Mdl, Msg, Page};

/// Link to a page of the application.
pub fn href(page: Page) -> String {
    format!("#{}", page.path())
}

#[component]
pub fn NavBar(mdl: RwSignal<Mdl>, dispatch: Callback<Msg>) -> impl IntoView {
    let user_name = create_memo(move |_| {
        mdl.with(|mdl| mdl.menu.user.as_ref().map(|user| user.user_name.clone()))
    });

    view! {
      <nav>
        <a href=href(Page::Home)><strong>"Book Store"</strong></a>
        {
          move || match user_name.get() {
              Some(user_name) => view! {
                <a href=href(Page::WishList)>"Wish list"</a>
                <a
                  href="#"
                  on:click=move |ev| {
                      ev.prevent_default();
                      dispatch.call(Msg::LogoutRequested);
                  }
                >
                  { format!("Logout ({user_name})") }
                </a>
              }.into_view(),
              None => view! {
                <a href=href(Page::Login)>"Login"</a>
              }.into_view(),
          }
        }
      </nav>
    }
}
