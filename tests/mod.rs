pub mod context;
pub mod traits;
pub mod types;
