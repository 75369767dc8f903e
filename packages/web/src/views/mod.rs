mod login;
pub use login::Login;

mod students;
pub use students::Students;
