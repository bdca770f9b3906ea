pub mod home;
pub mod login;
pub mod wish_list;
