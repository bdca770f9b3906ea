use leptos::*;

use bookstore_app::{login, Mdl, Msg, PageMdl};

fn login_mdl(mdl: RwSignal<Mdl>) -> Signal<login::Mdl> {
    Signal::derive(move || {
        mdl.with(|mdl| match &mdl.page {
            PageMdl::Login(login) => login.clone(),
            _ => login::Mdl::default(),
        })
    })
}

#[component]
pub fn Login(mdl: RwSignal<Mdl>, dispatch: Callback<Msg>) -> impl IntoView {
    let login = login_mdl(mdl);
    let send = move |msg| dispatch.call(Msg::Login(msg));

    view! {
      <section>
        <h1>"Login"</h1>
        <form on:submit=move |ev| {
            ev.prevent_default();
            send(login::Msg::Submit);
        }>
          <input
            type="text"
            placeholder="User name"
            prop:value=move || login.with(|l| l.login.user_name.clone())
            on:input=move |ev| send(login::Msg::UserNameChanged(event_target_value(&ev)))
          />
          <input
            type="password"
            placeholder="Password"
            prop:value=move || login.with(|l| l.login.password.clone())
            on:input=move |ev| send(login::Msg::PasswordChanged(event_target_value(&ev)))
          />
          <button type="submit" prop:disabled=move || login.with(|l| l.running)>
            "Log in"
          </button>
        </form>
        <Show when=move || login.with(|l| l.user.is_some())>
          <p>
          {
            move || login.with(|l| {
                l.user
                    .as_ref()
                    .map(|user| format!("Currently logged in as {}", user.user_name))
            })
          }
          </p>
        </Show>
        <p class="error">{ move || login.with(|l| l.error.clone()) }</p>
      </section>
    }
}
