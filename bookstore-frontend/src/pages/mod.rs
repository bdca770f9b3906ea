mod home;
mod login;
mod not_found;
mod wish_list;

pub use self::{home::*, login::*, not_found::*, wish_list::*};
