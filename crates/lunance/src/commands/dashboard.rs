//! Dashboard command handlers.

use tabled::Tabled;

use lunance_core::entity::{CategorySpending, DashboardSummary, MonthlyTrend};
use lunance_core::{Services, UseCase};

use crate::cli::{DashboardArgs, DashboardCommand, OutputFormat};
use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

impl From<&CategorySpending> for SpendingRow {
    fn from(s: &CategorySpending) -> Self {
        Self {
            name: s.name.clone(),
            amount: output::format_amount(s.amount),
            share: format!("{:.1}%", s.percentage),
        }
    }
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

fn trend_row(t: &MonthlyTrend, color: bool) -> TrendRow {
    TrendRow {
        month: t.month.clone(),
        income: output::format_amount(t.income),
        expense: output::format_amount(t.expense),
        net: output::signed_amount(t.net(), color),
    }
}

fn summary_table(summary: &DashboardSummary, render: &Render) -> Result<String, CliError> {
    let ratio = summary
        .spending_ratio()
        .map_or_else(|| "-".into(), |r| format!("{r:.1}%"));
    let head = output::detail(
        &[
            ("Period", summary.period.clone()),
            ("Income", output::format_amount(summary.total_income)),
            ("Expense", output::format_amount(summary.total_expense)),
            ("Balance", output::signed_amount(summary.balance, render.color)),
            ("Spent", ratio),
            ("Transactions", summary.transaction_count.to_string()),
        ],
        render.color,
    );
    if summary.top_categories.is_empty() {
        return Ok(head);
    }
    let top = output::render_list(render, &summary.top_categories, |s| SpendingRow::from(s))?;
    Ok(format!("{head}\n\n{top}"))
}

pub async fn handle(
    services: &Services,
    args: DashboardArgs,
    render: &Render,
) -> Result<(), CliError> {
    match args.command {
        DashboardCommand::Summary { period } => {
            let outcome = services.dashboard_summary().call(period).await;
            let summary = util::settle(outcome, services)?;
            let out = match render.format {
                OutputFormat::Table => summary_table(&summary, render)?,
                OutputFormat::Json | OutputFormat::JsonCompact => {
                    output::render_single(render, &summary, |_| String::new())?
                }
            };
            output::print_output(&out, render.quiet);
            Ok(())
        }

        DashboardCommand::Trend { months } => {
            let outcome = services.monthly_trend().call(months).await;
            let trend = util::settle(outcome, services)?;
            let out = output::render_list(render, &trend, |t| trend_row(t, render.color))?;
            output::print_output(&out, render.quiet);
            Ok(())
        }
    }
}
