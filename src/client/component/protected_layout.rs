use dioxus::prelude::*;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        router::Route,
        store::user::UserState,
    },
    model::user::UserDto,
};

/// Who may see the routes below a protected layout.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Access {
    Member,
    Admin,
}

impl Access {
    pub fn allows(self, user: &UserDto) -> bool {
        match self {
            Access::Member => true,
            Access::Admin => user.admin,
        }
    }
}

/// Any logged in band member.
#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { access: Access::Member }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { access: Access::Admin }
    }
}

/// Renders the nested route once the session user is known.
///
/// Visitors without a session are sent to the login page. Members without the required
/// access get a 403 page.
#[component]
pub fn ProtectedLayout(access: Access) -> Element {
    let user_store = use_context::<Store<UserState>>();
    let nav = navigator();

    let fetched = user_store.read().fetched;
    let allowed = user_store
        .read()
        .user
        .as_ref()
        .map(|user| access.allows(user));

    let logged_in = allowed.is_some();
    use_effect(use_reactive!(|(logged_in, fetched)| {
        if fetched && !logged_in {
            nav.replace(Route::Login {});
        }
    }));

    rsx! {
        if !fetched {
            LoadingPage {}
        } else if allowed == Some(true) {
            Outlet::<Route> {}
        } else if allowed == Some(false) {
            ErrorPage { status: 403, message: "This page is only available to admins" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(admin: bool) -> UserDto {
        UserDto {
            id: "user-1".to_string(),
            username: "drummer".to_string(),
            display_name: "Drummer".to_string(),
            admin,
        }
    }

    #[test]
    fn members_see_member_routes() {
        assert!(Access::Member.allows(&member(false)));
        assert!(Access::Member.allows(&member(true)));
    }

    #[test]
    fn only_admins_see_admin_routes() {
        assert!(!Access::Admin.allows(&member(false)));
        assert!(Access::Admin.allows(&member(true)));
    }
}
