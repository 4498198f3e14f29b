//! Authentication UI
//!
//! Register and login forms plus the panel that shows the issued tokens.

pub mod login_form;
pub mod register_form;
pub mod result_panel;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use result_panel::AuthResultPanel;
