// Use cases layer: validation rules, session workflows and form submission.

pub mod current_user;
pub mod forms;
pub mod login;
pub mod logout;
mod session;
pub mod signup;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use current_user::CurrentUserUseCase;
pub use forms::FormSubmissionUseCase;
pub use login::LoginUseCase;
pub use logout::LogoutUseCase;
pub use signup::SignupUseCase;
pub use validation::{validate_email, validate_login_data, validate_password, validate_signup_data};
