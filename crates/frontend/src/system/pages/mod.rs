pub mod session_required;
