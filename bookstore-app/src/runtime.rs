use std::{collections::VecDeque, rc::Rc};

use futures::{
    channel::mpsc::UnboundedReceiver,
    future::LocalBoxFuture,
    stream::{FuturesUnordered, StreamExt},
};

use crate::{
    delete_user, hydrate, parse_route, save_user, update, Api, Cmd, Mdl, Msg, Orders, Storage,
};

/// Changes the URL of the application.
pub trait Navigator {
    /// Adds a new entry to the history.
    fn push_url(&self, path: &str);
    /// Replaces the current entry of the history.
    fn replace_url(&self, path: &str);
}

/// Drives the application.
///
/// Messages are processed one after another in the order they arrive.
/// Storage and navigation commands complete immediately,
/// API requests complete in the order the responses arrive.
pub struct Runtime<S, A, N> {
    mdl: Mdl,
    queue: VecDeque<Msg>,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Msg>>,
    storage: S,
    api: Rc<A>,
    navigator: N,
}

impl<S, A, N> Runtime<S, A, N>
where
    S: Storage,
    A: Api + 'static,
    N: Navigator,
{
    /// Initializes the model for the given URL,
    /// optionally from the state that was rendered on the server.
    pub fn start(url: &str, initial_state: Option<&str>, storage: S, api: A, navigator: N) -> Self {
        log::info!("Start application at {url}");
        let mut orders = Orders::default();
        let mdl = hydrate::init(url, initial_state, &storage, &mut orders);
        let mut runtime = Self {
            mdl,
            queue: VecDeque::new(),
            in_flight: FuturesUnordered::new(),
            storage,
            api: Rc::new(api),
            navigator,
        };
        runtime.perform(orders);
        runtime
    }

    #[must_use]
    pub const fn model(&self) -> &Mdl {
        &self.mdl
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn dispatch(&mut self, msg: Msg) {
        self.queue.push_back(msg);
    }

    /// Nothing to process and no request pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty() && self.in_flight.is_empty()
    }

    /// Processes all queued messages including
    /// those that are enqueued while processing.
    pub fn process_queue(&mut self) {
        while let Some(msg) = self.queue.pop_front() {
            log::trace!("Process {msg:?}");
            let mut orders = Orders::default();
            update(msg, &mut self.mdl, &mut orders);
            self.perform(orders);
        }
    }

    /// Processes messages until no request is pending anymore.
    pub async fn run_until_idle(&mut self) {
        loop {
            self.process_queue();
            match self.in_flight.next().await {
                Some(msg) => self.queue.push_back(msg),
                None => break,
            }
        }
    }

    /// Processes messages from the `inbox` and the responses of
    /// pending requests until the inbox is closed.
    /// Requests that are still pending then are awaited before returning.
    ///
    /// `on_change` is invoked with the current model
    /// whenever the queue has been processed.
    pub async fn run<F>(mut self, mut inbox: UnboundedReceiver<Msg>, mut on_change: F)
    where
        F: FnMut(&Mdl),
    {
        loop {
            self.process_queue();
            on_change(&self.mdl);
            let next = if self.in_flight.is_empty() {
                inbox.next().await
            } else {
                futures::select! {
                    msg = inbox.next() => msg,
                    msg = self.in_flight.select_next_some() => Some(msg),
                }
            };
            let Some(msg) = next else {
                log::debug!("Inbox closed");
                self.run_until_idle().await;
                on_change(&self.mdl);
                break;
            };
            self.queue.push_back(msg);
        }
    }

    fn perform(&mut self, orders: Orders) {
        let (msgs, cmds) = orders.into_parts();
        self.queue.extend(msgs);
        for cmd in cmds {
            self.perform_cmd(cmd);
        }
    }

    fn perform_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Navigate(page) => {
                let path = page.path();
                self.navigator.push_url(path);
                self.queue.push_back(Msg::RouteChanged(parse_route(path)));
            }
            Cmd::ModifyUrl(page) => {
                let path = page.path();
                self.navigator.replace_url(path);
                self.queue.push_back(Msg::RouteChanged(parse_route(path)));
            }
            Cmd::SaveUser(user) => {
                let msg = match save_user(&self.storage, &user) {
                    Ok(()) => Msg::LoginSucceeded(user),
                    Err(err) => Msg::StorageWriteFailed(err),
                };
                self.queue.push_back(msg);
            }
            Cmd::DeleteUser => {
                let msg = match delete_user(&self.storage) {
                    Ok(()) => Msg::LoggedOut,
                    Err(err) => Msg::StorageWriteFailed(err),
                };
                self.queue.push_back(msg);
            }
            Cmd::Request(request) => {
                log::debug!("Perform {request:?}");
                let api = Rc::clone(&self.api);
                self.in_flight
                    .push(Box::pin(async move { request.perform(api.as_ref()).await }));
            }
        }
    }
}
