pub mod areas;
pub mod colonies;
pub mod dashboards;
pub mod login;
pub mod manager;
pub mod municipalities;
pub mod reports;
