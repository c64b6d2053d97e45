//! Pages
//!
//! One module per view: auth screens, dashboard, and an entity page per
//! CRM record type.

mod clients;
mod dashboard;
mod interactions;
mod login;
mod projects;
mod register;
mod reminders;

pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use interactions::InteractionsPage;
pub use login::LoginPage;
pub use projects::ProjectsPage;
pub use register::RegisterPage;
pub use reminders::RemindersPage;

/// Rows per page for every entity list.
pub const PAGE_SIZE: u32 = 10;

/// Quiet period before a search keystroke reaches the server.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;
