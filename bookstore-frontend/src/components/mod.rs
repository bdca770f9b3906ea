mod navbar;

pub use self::navbar::*;
