use crate::model::user::UserDto;

/// Session user shared through context.
///
/// `fetched` stays `false` until the first `/api/auth/user` request finished, so
/// protected layouts can tell "not logged in" apart from "not known yet".
#[derive(Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}
