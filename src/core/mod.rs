pub mod app;
pub mod render;
pub mod tracker;

pub use crate::domain::model::{Expense, ExpenseId, NewExpense, Participants};
pub use crate::domain::ports::{ConfigProvider, ExpenseApi};
pub use crate::utils::error::Result;
