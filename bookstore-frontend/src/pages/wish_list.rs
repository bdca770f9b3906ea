use leptos::*;

use bookstore_app::{entities::book::Book, wish_list, Mdl, Msg, PageMdl};

fn wish_list_mdl(mdl: RwSignal<Mdl>) -> Signal<wish_list::Mdl> {
    Signal::derive(move || {
        mdl.with(|mdl| match &mdl.page {
            PageMdl::WishList(wish_list) => wish_list.clone(),
            _ => wish_list::Mdl::default(),
        })
    })
}

#[component]
pub fn WishList(mdl: RwSignal<Mdl>, dispatch: Callback<Msg>) -> impl IntoView {
    let wish_list = wish_list_mdl(mdl);
    let send = move |msg| dispatch.call(Msg::WishList(msg));
    let books = create_memo(move |_| wish_list.with(|w| w.wish_list.books.clone()));

    view! {
      <section>
        <h1>{ move || wish_list.with(|w| format!("Wish list of {}", w.wish_list.user_name)) }</h1>
        <p>
        {
          move || wish_list.with(|w| {
              w.reset_time
                  .as_ref()
                  .map(|time| format!("All wish lists are reset regularly, the last time at {time}."))
          })
        }
        </p>
        <p class="error">{ move || wish_list.with(|w| w.error.clone()) }</p>
        <ul>
          <For
            each=move || books.get()
            key=|book| (book.authors.clone(), book.title.clone())
            children=move |book| view! { <BookItem book on_remove=send /> }
          />
        </ul>
        <form on:submit=move |ev| {
            ev.prevent_default();
            send(wish_list::Msg::AddBook);
        }>
          <BookInput
            placeholder="Title"
            value=Signal::derive(move || wish_list.with(|w| w.new_book.title.clone()))
            error=Signal::derive(move || wish_list.with(|w| w.new_book_errors.title.clone()))
            on_input=move |v| send(wish_list::Msg::TitleChanged(v))
          />
          <BookInput
            placeholder="Authors"
            value=Signal::derive(move || wish_list.with(|w| w.new_book.authors.clone()))
            error=Signal::derive(move || wish_list.with(|w| w.new_book_errors.authors.clone()))
            on_input=move |v| send(wish_list::Msg::AuthorsChanged(v))
          />
          <BookInput
            placeholder="Link"
            value=Signal::derive(move || wish_list.with(|w| w.new_book.link.clone()))
            error=Signal::derive(move || wish_list.with(|w| w.new_book_errors.link.clone()))
            on_input=move |v| send(wish_list::Msg::LinkChanged(v))
          />
          <BookInput
            placeholder="Image link"
            value=Signal::derive(move || wish_list.with(|w| w.new_book.image_link.clone()))
            error=Signal::derive(move || wish_list.with(|w| w.new_book_errors.image_link.clone()))
            on_input=move |v| send(wish_list::Msg::ImageLinkChanged(v))
          />
          <button type="submit">"Add book"</button>
        </form>
      </section>
    }
}

#[component]
fn BookItem<F>(book: Book, on_remove: F) -> impl IntoView
where
    F: Fn(wish_list::Msg) + 'static + Copy,
{
    let Book {
        title,
        authors,
        link,
        image_link,
    } = book.clone();
    view! {
      <li>
        <img src=image_link alt=title.clone() />
        <a href=link target="_blank">{ title }</a>
        " by "
        { authors }
        <button on:click=move |_| on_remove(wish_list::Msg::RemoveBook(book.clone()))>
          "Remove"
        </button>
      </li>
    }
}

#[component]
fn BookInput<F>(
    placeholder: &'static str,
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
      <div>
        <input
          type="text"
          placeholder=placeholder
          prop:value=move || value.get()
          on:input=move |ev| on_input(event_target_value(&ev))
        />
        <span class="error">{ move || error.get() }</span>
      </div>
    }
}
