use crate::domain::ledger::{self, PayeeTotal, Settlement};
use crate::domain::model::{Expense, NewExpense, Participants};
use crate::domain::ports::ExpenseApi;
use crate::utils::error::Result;
use crate::utils::validation::{parse_non_negative_amount, validate_one_of};
use chrono::{NaiveDate, Utc};

/// Raw values of the "Add Expense" form, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub payee_name: String,
    pub product: String,
    pub price: String,
}

impl ExpenseForm {
    pub fn new(
        payee_name: impl Into<String>,
        product: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            payee_name: payee_name.into(),
            product: product.into(),
            price: price.into(),
        }
    }

    pub fn to_new_expense(
        &self,
        participants: &Participants,
        set_date: NaiveDate,
    ) -> Result<NewExpense> {
        let payee_name = validate_one_of("payee", &self.payee_name, participants.as_slice())?;
        let price = parse_non_negative_amount("price", &self.price)?;

        Ok(NewExpense {
            payee_name: payee_name.to_string(),
            product: self.product.clone(),
            price,
            set_date,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub index: usize,
    pub payee_name: String,
    pub product: String,
    pub set_date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub item_rows: Vec<ItemRow>,
    pub summary_rows: Vec<PayeeTotal>,
    pub debt_row: Option<Settlement>,
}

/// What the tracker shows at a given moment.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerView {
    Loading,
    Alert(String),
    Table(TableView),
}

/// The expense list component: owns the in-memory list and its load/form state.
pub struct ExpenseTracker<A: ExpenseApi> {
    api: A,
    participants: Participants,
    items: Vec<Expense>,
    loading: bool,
    error: Option<String>,
    form_open: bool,
}

impl<A: ExpenseApi> ExpenseTracker<A> {
    pub fn new(api: A, participants: Participants) -> Self {
        Self {
            api,
            participants,
            items: Vec::new(),
            loading: true,
            error: None,
            form_open: false,
        }
    }

    /// Initial fetch. A failure is kept as the alert message, never returned.
    pub async fn load(&mut self) {
        tracing::debug!("Loading expenses");

        match self.api.list_items().await {
            Ok(items) => {
                tracing::info!("📥 Loaded {} expenses", items.len());
                self.items = items;
            }
            Err(e) => {
                tracing::error!("❌ Failed to load expenses: {}", e);
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn items(&self) -> &[Expense] {
        &self.items
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    /// Saves the form dated today (UTC).
    pub async fn submit(&mut self, form: &ExpenseForm) -> Result<&Expense> {
        self.submit_on(form, Utc::now().date_naive()).await
    }

    /// Posts the form, appends the created record and closes the form.
    /// Errors are left to the caller; state is untouched on failure.
    pub async fn submit_on(
        &mut self,
        form: &ExpenseForm,
        set_date: NaiveDate,
    ) -> Result<&Expense> {
        let expense = form.to_new_expense(&self.participants, set_date)?;
        let created = self.api.add_item(&expense).await?;
        tracing::debug!("Appending expense {}", created.id);

        self.items.push(created);
        self.close_form();

        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    pub fn totals(&self) -> Vec<PayeeTotal> {
        ledger::totals(&self.items, &self.participants)
    }

    pub fn settlement(&self) -> Option<Settlement> {
        ledger::settlement(&self.items, &self.participants)
    }

    pub fn view(&self) -> TrackerView {
        if self.loading {
            return TrackerView::Loading;
        }

        if let Some(message) = &self.error {
            return TrackerView::Alert(message.clone());
        }

        let item_rows = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| ItemRow {
                index: idx + 1,
                payee_name: item.payee_name.clone(),
                product: item.product.clone(),
                set_date: item.set_date,
                price: item.price,
            })
            .collect();

        TrackerView::Table(TableView {
            item_rows,
            summary_rows: self.totals(),
            debt_row: self.settlement(),
        })
    }
}
