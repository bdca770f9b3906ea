use crate::{Cmd, Orders, Request};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Mdl {
    /// `None` until fetched.
    pub wish_list_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    FetchedWishListCount(usize),
    FetchError(String),
}

pub fn init(orders: &mut Orders) -> Mdl {
    orders.perform_cmd(Cmd::Request(Request::WishListCount));
    Mdl::default()
}

pub fn update(msg: Msg, mdl: &mut Mdl, _: &mut Orders) {
    match msg {
        Msg::FetchedWishListCount(count) => {
            mdl.wish_list_count = Some(count);
        }
        Msg::FetchError(err) => {
            log::warn!("Unable to fetch wish list count: {err}");
        }
    }
}
