mod http;
mod json_store;

pub use self::{http::*, json_store::*};
