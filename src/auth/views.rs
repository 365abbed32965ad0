use super::SessionManager;

/// Logical pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    Members,
    Activities,
    Accounts,
    Notices,
    Gallery,
    Contact,
    Admin,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Home,
        View::About,
        View::Members,
        View::Activities,
        View::Accounts,
        View::Notices,
        View::Gallery,
        View::Contact,
        View::Admin,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::About => "/about",
            View::Members => "/members",
            View::Activities => "/activities",
            View::Accounts => "/accounts",
            View::Notices => "/notices",
            View::Gallery => "/gallery",
            View::Contact => "/contact",
            View::Admin => "/admin",
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.path() == path)
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, View::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAccess {
    Granted,
    Redirect(View),
}

/// Admin pages send everyone else to the login page under accounts.
pub fn authorize_view(session: &SessionManager, view: View) -> ViewAccess {
    if view.requires_admin() && !session.is_admin() {
        ViewAccess::Redirect(View::Accounts)
    } else {
        ViewAccess::Granted
    }
}
