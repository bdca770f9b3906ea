use leptos::*;

use bookstore_app::{Mdl, PageMdl};

#[component]
pub fn Home(mdl: RwSignal<Mdl>) -> impl IntoView {
    let count = Signal::derive(move || {
        mdl.with(|mdl| match &mdl.page {
            PageMdl::Home(home) => home.wish_list_count,
            _ => None,
        })
    });

    view! {
      <section>
        <h1>"Welcome to the book store"</h1>
        <p>
        {
          move || match count.get() {
              Some(count) => format!("{count} books are on the wish lists of our users."),
              None => "Counting the books on all wish lists ...".to_string(),
          }
        }
        </p>
      </section>
    }
}
