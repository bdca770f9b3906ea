/// The session of a logged in user.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub user_name : String,
    /// Opaque credential, sent as bearer token.
    pub token     : String,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Login {
    pub user_name : String,
    pub password  : String,
}

impl Login {
    /// Both fields contain something else than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.user_name.trim().is_empty() && !self.password.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_login() {
        let login = Login {
            user_name: "test".into(),
            password: "test".into(),
        };
        assert!(login.is_complete());
    }

    #[test]
    fn incomplete_login() {
        assert!(!Login::default().is_complete());
        let login = Login {
            user_name: "test".into(),
            password: "  ".into(),
        };
        assert!(!login.is_complete());
        let login = Login {
            user_name: "\t".into(),
            password: "secret".into(),
        };
        assert!(!login.is_complete());
    }
}
