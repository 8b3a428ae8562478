pub mod calculations;
pub mod controller;
pub mod draw;
pub mod error;
pub mod input;
pub mod models;

pub use controller::{SubmitOutcome, submit};
pub use error::InputError;
pub use input::ExpenseFormInput;
pub use models::*;
