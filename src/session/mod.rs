pub mod session_id;
pub mod session_settings;
