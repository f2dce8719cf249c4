use crate::domain::model::{Expense, NewExpense};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}

/// Remote store of expense records.
#[async_trait]
pub trait ExpenseApi: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Expense>>;
    async fn add_item(&self, item: &NewExpense) -> Result<Expense>;
}
