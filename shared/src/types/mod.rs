//! Type definitions shared by the API layer
//!
//! - `response` - The `{ success, message }` envelope every endpoint returns

pub mod response;

pub use response::FormResponse;
