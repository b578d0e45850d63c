mod session_layout;
pub use session_layout::SessionLayout;

mod guard;
pub use guard::RequireAuth;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod home;
pub use home::Home;

mod search;
pub use search::Search;

mod chat;
pub use chat::ChatPage;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;
