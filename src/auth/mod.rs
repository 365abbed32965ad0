mod credentials;
mod session;
mod views;

pub use credentials::secret_matches;
pub use session::*;
pub use views::*;
