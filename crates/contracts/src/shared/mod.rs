pub mod calendar;
pub mod errors;
pub mod export;
pub mod list;
pub mod notice;
pub mod search;
