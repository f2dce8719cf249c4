use crate::domain::model::{Expense, NewExpense};
use crate::domain::ports::{ConfigProvider, ExpenseApi};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// REST client for the `/items` collection of the expense backend.
#[derive(Debug, Clone)]
pub struct HttpExpenseApi {
    base_url: String,
    client: Client,
}

impl HttpExpenseApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.base_url())
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ExpenseApi for HttpExpenseApi {
    async fn list_items(&self) -> Result<Vec<Expense>> {
        let url = self.items_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let items: Vec<Expense> = response.error_for_status()?.json().await?;
        tracing::debug!("Fetched {} expenses", items.len());

        Ok(items)
    }

    async fn add_item(&self, item: &NewExpense) -> Result<Expense> {
        let url = self.items_url();
        tracing::debug!("POST {} payload: {}", url, serde_json::to_string(item)?);

        // .json() 會設定 Content-Type: application/json
        let response = self.client.post(&url).json(item).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let created: Expense = response.error_for_status()?.json().await?;
        tracing::info!("Expense {} created for {}", created.id, created.payee_name);

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExpenseId;
    use crate::utils::error::TrackerError;
    use chrono::NaiveDate;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_list_items_successful_response() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([
            {"id": 1, "payeeName": "Rahul", "product": "Milk", "price": 2.5, "setDate": "2024-02-01"},
            {"id": 2, "payeeName": "Ramesh", "product": "Bread", "price": 3, "setDate": "2024-02-02"}
        ]);

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/items");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let api = HttpExpenseApi::new(server.base_url());
        let items = api.list_items().await.unwrap();

        api_mock.assert();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ExpenseId::Number(1));
        assert_eq!(items[1].product, "Bread");
    }

    #[tokio::test]
    async fn test_list_items_server_error_is_reported() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/items");
            then.status(500);
        });

        let api = HttpExpenseApi::new(server.base_url());
        let result = api.list_items().await;

        api_mock.assert();
        assert!(matches!(result, Err(TrackerError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_add_item_posts_json_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/items")
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "payeeName": "Ramesh",
                    "product": "Tea",
                    "price": 1.5,
                    "setDate": "2024-04-10"
                }));
            then.status(201).json_body(serde_json::json!({
                "id": "abc123",
                "payeeName": "Ramesh",
                "product": "Tea",
                "price": 1.5,
                "setDate": "2024-04-10"
            }));
        });

        let api = HttpExpenseApi::new(format!("{}/", server.base_url()));
        let created = api
            .add_item(&NewExpense {
                payee_name: "Ramesh".to_string(),
                product: "Tea".to_string(),
                price: 1.5,
                set_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
            })
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(created.id, ExpenseId::Text("abc123".to_string()));
    }

    #[test]
    fn test_items_url_tolerates_trailing_slash() {
        assert_eq!(
            HttpExpenseApi::new("http://localhost:3001/").items_url(),
            "http://localhost:3001/items"
        );
        assert_eq!(
            HttpExpenseApi::new("http://localhost:3001/api").items_url(),
            "http://localhost:3001/api/items"
        );
    }
}
