pub mod aggregate;
pub mod export;
