use crate::core::{timestamp_id, AppError};
use crate::models::{format_date, required};
use crate::models::transactions::{Transaction, TransactionForm, TransactionStatus};
use crate::state_store::StateStore;

use super::{contains_id, delete_record, edit_record, validate_form};

// Record a ledger entry, or correct an existing one
#[tracing::instrument(name = "Saving transaction", skip(store, form))]
pub fn upsert_transaction(
    store: &mut StateStore,
    form: TransactionForm,
    editing_id: Option<&str>,
) -> Result<Transaction, AppError> {
    validate_form(&form)?;

    match editing_id {
        Some(id) => edit_record(
            store,
            id,
            |d| &mut d.transactions,
            "Transaction",
            |t| t.apply(form),
        ),
        None => create_transaction(store, form),
    }
}

fn create_transaction(
    store: &mut StateStore,
    form: TransactionForm,
) -> Result<Transaction, AppError> {
    let member_id = required(form.member_id, "Member")?;
    let amount = required(form.amount, "Amount")?;

    let dataset = store.dataset();
    if dataset.member(&member_id).is_none() {
        tracing::warn!(member_id = %member_id, "recording a transaction for an unknown member");
    }

    let transaction = Transaction {
        id: timestamp_id(store.clock(), |id| contains_id(&dataset.transactions, id)),
        member_id,
        amount,
        date: format_date(form.date.unwrap_or_else(|| store.clock().today())),
        kind: form.kind.unwrap_or_default(),
        status: TransactionStatus::Paid,
    };

    let mut next = dataset.clone();
    next.transactions.push(transaction.clone());
    store.replace(next);

    Ok(transaction)
}

#[tracing::instrument(name = "Deleting transaction", skip(store))]
pub fn delete_transaction(store: &mut StateStore, transaction_id: &str) -> bool {
    delete_record(store, transaction_id, |d| &mut d.transactions)
}
