//! Two-party balance derived from the expense list.

use crate::domain::model::{Expense, Participants};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayeeTotal {
    pub name: String,
    pub total: f64,
}

/// Who owes whom, and how much.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    pub debtor: String,
    pub creditor: String,
    pub amount: f64,
}

pub fn total_by_payee(items: &[Expense], payee_name: &str) -> f64 {
    let payee_name = payee_name.to_lowercase();
    items
        .iter()
        .filter(|item| item.payee_name.to_lowercase() == payee_name)
        .map(|item| item.price)
        .sum()
}

pub fn totals(items: &[Expense], participants: &Participants) -> Vec<PayeeTotal> {
    participants
        .as_slice()
        .iter()
        .map(|name| PayeeTotal {
            name: name.clone(),
            total: total_by_payee(items, name),
        })
        .collect()
}

/// Signed half-difference: positive when the first participant paid more.
pub fn compute_debt(items: &[Expense], participants: &Participants) -> f64 {
    let first_total = total_by_payee(items, participants.first());
    let second_total = total_by_payee(items, participants.second());

    (first_total - second_total) / 2.0
}

/// `None` when both sides paid the same.
pub fn settlement(items: &[Expense], participants: &Participants) -> Option<Settlement> {
    let debt = compute_debt(items, participants);

    if debt == 0.0 {
        return None;
    }

    let (debtor, creditor) = if debt < 0.0 {
        (participants.first(), participants.second())
    } else {
        (participants.second(), participants.first())
    };

    tracing::debug!("Debt computed: {} owes {} {}", debtor, creditor, debt.abs());

    Some(Settlement {
        debtor: debtor.to_string(),
        creditor: creditor.to_string(),
        amount: debt.abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExpenseId;
    use chrono::NaiveDate;

    fn expense(id: u64, payee: &str, price: f64) -> Expense {
        Expense {
            id: ExpenseId::Number(id),
            payee_name: payee.to_string(),
            product: format!("item {}", id),
            price,
            set_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_second_participant_owes_half_difference() {
        let participants = Participants::new("A", "B");
        let items = vec![expense(1, "A", 10.0), expense(2, "B", 4.0)];

        assert_eq!(total_by_payee(&items, "A"), 10.0);
        assert_eq!(total_by_payee(&items, "B"), 4.0);
        assert_eq!(compute_debt(&items, &participants), 3.0);

        let result = settlement(&items, &participants).unwrap();
        assert_eq!(result.debtor, "B");
        assert_eq!(result.creditor, "A");
        assert_eq!(result.amount, 3.0);
    }

    #[test]
    fn test_first_participant_owes_when_they_paid_less() {
        let participants = Participants::default();
        let items = vec![
            expense(1, "Rahul", 5.0),
            expense(2, "Ramesh", 20.0),
            expense(3, "Ramesh", 1.0),
        ];

        assert_eq!(compute_debt(&items, &participants), -8.0);
        let result = settlement(&items, &participants).unwrap();
        assert_eq!(result.debtor, "Rahul");
        assert_eq!(result.amount, 8.0);
    }

    #[test]
    fn test_payee_matching_ignores_case() {
        let participants = Participants::default();
        let items = vec![
            expense(1, "rahul", 10.0),
            expense(2, "RAHUL", 2.0),
            expense(3, "Ramesh", 4.0),
        ];

        assert_eq!(total_by_payee(&items, "Rahul"), 12.0);
        assert_eq!(compute_debt(&items, &participants), 4.0);
    }

    #[test]
    fn test_equal_totals_have_no_settlement() {
        let participants = Participants::default();
        let items = vec![expense(1, "Rahul", 7.5), expense(2, "Ramesh", 7.5)];

        assert_eq!(compute_debt(&items, &participants), 0.0);
        assert!(settlement(&items, &participants).is_none());
        assert!(settlement(&[], &participants).is_none());
    }

    #[test]
    fn test_unknown_payees_are_ignored() {
        let participants = Participants::default();
        let items = vec![expense(1, "Someone", 100.0), expense(2, "Rahul", 2.0)];

        let totals = totals(&items, &participants);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].total, 2.0);
        assert_eq!(totals[1].total, 0.0);
        assert_eq!(compute_debt(&items, &participants), 1.0);
    }
}
