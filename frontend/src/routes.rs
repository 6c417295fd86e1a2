use common::model::role::Role;

/// Top-level navigation state. One route per role dashboard plus the login
/// screen; the section shown inside a dashboard is that dashboard's own
/// state, not a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    State,
    Municipality,
    Colony,
    Area,
}

/// Landing route for a freshly authenticated or restored session. Pure and
/// total over `Role`: routing never depends on anything but the role.
pub fn landing_route(role: Role) -> Route {
    match role {
        Role::State => Route::State,
        Role::Municipality => Route::Municipality,
        Role::Colony => Route::Colony,
        Role::Area => Route::Area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_lands_on_its_own_dashboard() {
        assert_eq!(landing_route(Role::State), Route::State);
        assert_eq!(landing_route(Role::Municipality), Route::Municipality);
        assert_eq!(landing_route(Role::Colony), Route::Colony);
        assert_eq!(landing_route(Role::Area), Route::Area);
    }

    #[test]
    fn no_two_roles_share_a_landing_route() {
        let routes = [
            landing_route(Role::State),
            landing_route(Role::Municipality),
            landing_route(Role::Colony),
            landing_route(Role::Area),
        ];
        for (i, a) in routes.iter().enumerate() {
            for b in routes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
