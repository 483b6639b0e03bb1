//! Transaction history command handlers.

use tabled::Tabled;

use lunance_api::requests::{CreateTransactionRequest, TransactionFilter, UpdateTransactionRequest};
use lunance_core::entity::Transaction;
use lunance_core::usecase::UpdateTransactionParams;
use lunance_core::{Services, UseCase};

use crate::cli::{GlobalOpts, HistoryArgs, HistoryCommand, HistoryFilterArgs};
use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn transaction_row(tx: &Transaction, color: bool) -> TransactionRow {
    TransactionRow {
        id: tx.id.clone(),
        date: tx.date.format("%Y-%m-%d").to_string(),
        category: tx
            .category_name
            .clone()
            .unwrap_or_else(|| tx.category_id.clone()),
        description: tx.description.clone(),
        amount: output::signed_amount(tx.signed_amount(), color),
    }
}

fn transaction_detail(tx: &Transaction, color: bool) -> String {
    output::detail(
        &[
            ("ID", tx.id.clone()),
            ("Type", tx.transaction_type.to_string()),
            ("Amount", output::signed_amount(tx.signed_amount(), color)),
            ("Category", tx.category_name.clone().unwrap_or_default()),
            ("Category ID", tx.category_id.clone()),
            ("Description", tx.description.clone()),
            ("Notes", tx.notes.clone().unwrap_or_default()),
            ("Date", tx.date.to_rfc3339()),
        ],
        color,
    )
}

impl From<HistoryFilterArgs> for TransactionFilter {
    fn from(args: HistoryFilterArgs) -> Self {
        Self {
            transaction_type: args.kind.map(Into::into),
            category_id: args.category,
            start_date: args.from,
            end_date: args.to,
            page: args.page,
            limit: args.limit,
        }
    }
}

/// Amounts are positive magnitudes; `NaN` and infinities are rejected too.
fn check_amount(amount: f64) -> Result<(), CliError> {
    if amount.is_finite() && amount > 0.0 {
        return Ok(());
    }
    Err(CliError::Validation {
        field: "amount".into(),
        reason: format!("must be a finite number greater than zero, got {amount}"),
    })
}

fn print_list(render: &Render, list: &[Transaction]) -> Result<(), CliError> {
    let out = output::render_list(render, list, |tx| transaction_row(tx, render.color))?;
    output::print_output(&out, render.quiet);
    Ok(())
}

fn print_one(render: &Render, tx: &Transaction) -> Result<(), CliError> {
    let out = output::render_single(render, tx, |t| transaction_detail(t, render.color))?;
    output::print_output(&out, render.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    services: &Services,
    args: HistoryArgs,
    global: &GlobalOpts,
    render: &Render,
) -> Result<(), CliError> {
    match args.command {
        HistoryCommand::List(filter) => {
            if let (Some(from), Some(to)) = (filter.from, filter.to) {
                if from > to {
                    return Err(CliError::Validation {
                        field: "from".into(),
                        reason: format!("{from} is after {to}"),
                    });
                }
            }
            let outcome = services.get_transactions().call(filter.into()).await;
            print_list(render, &util::settle(outcome, services)?)
        }

        HistoryCommand::Get { id } => {
            let outcome = services.get_transaction().call(id).await;
            print_one(render, &util::settle(outcome, services)?)
        }

        HistoryCommand::Search { query } => {
            let outcome = services.search_transactions().call(query).await;
            print_list(render, &util::settle(outcome, services)?)
        }

        HistoryCommand::Add {
            kind,
            amount,
            category,
            description,
            notes,
            date,
        } => {
            check_amount(amount)?;
            let request = CreateTransactionRequest {
                transaction_type: kind.into(),
                amount,
                category_id: category,
                description,
                notes,
                date,
            };
            let outcome = services.create_transaction().call(request).await;
            let created = util::settle(outcome, services)?;
            output::notice(render, "Transaction recorded");
            print_one(render, &created)
        }

        HistoryCommand::Update {
            id,
            kind,
            amount,
            category,
            description,
            notes,
            date,
        } => {
            if let Some(amount) = amount {
                check_amount(amount)?;
            }
            let request = UpdateTransactionRequest {
                transaction_type: kind.map(Into::into),
                amount,
                category_id: category,
                description,
                notes,
                date,
            };
            let outcome = services
                .update_transaction()
                .call(UpdateTransactionParams { id, request })
                .await;
            print_one(render, &util::settle(outcome, services)?)
        }

        HistoryCommand::Delete { id } => {
            if !util::confirm(&format!("Delete transaction '{id}'?"), global.yes)? {
                return Ok(());
            }
            util::settle(services.delete_transaction().call(id).await, services)?;
            output::notice(render, "Transaction deleted");
            Ok(())
        }
    }
}
