pub mod area;
pub mod colony;
pub mod municipal;
pub mod state;

use yew::prelude::*;

/// Props shared by every role dashboard: the single sign-out entry point,
/// owned by the root component.
#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_logout: Callback<()>,
}
