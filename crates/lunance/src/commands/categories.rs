//! Category command handlers.

use tabled::Tabled;

use lunance_api::TransactionType;
use lunance_api::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use lunance_core::entity::{Category, CategoryWithStats};
use lunance_core::usecase::{SearchCategoriesParams, UpdateCategoryParams};
use lunance_core::{Services, UseCase};

use crate::cli::{CategoriesArgs, CategoriesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Keywords")]
    keywords: String,
}

impl From<&Category> for CategoryRow {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id.clone(),
            name: if c.is_default {
                format!("{} *", c.name)
            } else {
                c.name.clone()
            },
            kind: c.category_type.to_string(),
            icon: c.icon.clone(),
            color: c.color.clone(),
            keywords: c.keywords.join(", "),
        }
    }
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Count")]
    count: u64,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Last used")]
    last_used: String,
}

impl From<&CategoryWithStats> for StatsRow {
    fn from(c: &CategoryWithStats) -> Self {
        Self {
            id: c.category.id.clone(),
            name: c.category.name.clone(),
            kind: c.category.category_type.to_string(),
            count: c.stats.transaction_count,
            total: output::format_amount(c.stats.total_amount),
            average: output::format_amount(c.stats.average_amount),
            last_used: if c.stats.is_unused() {
                "never".into()
            } else {
                c.stats
                    .last_used
                    .map_or_else(|| "-".into(), |d| d.format("%Y-%m-%d").to_string())
            },
        }
    }
}

fn category_detail(c: &Category, color: bool) -> String {
    output::detail(
        &[
            ("ID", c.id.clone()),
            ("Name", c.name.clone()),
            ("Type", c.category_type.to_string()),
            ("Icon", c.icon.clone()),
            ("Color", c.color.clone()),
            ("Keywords", c.keywords.join(", ")),
            ("Default", c.is_default.to_string()),
            ("Created", c.created_at.to_rfc3339()),
        ],
        color,
    )
}

fn print_list(render: &Render, list: &[Category]) -> Result<(), CliError> {
    let out = output::render_list(render, list, |c| CategoryRow::from(c))?;
    output::print_output(&out, render.quiet);
    Ok(())
}

fn print_one(render: &Render, category: &Category) -> Result<(), CliError> {
    let out = output::render_single(render, category, |c| category_detail(c, render.color))?;
    output::print_output(&out, render.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    services: &Services,
    args: CategoriesArgs,
    global: &GlobalOpts,
    render: &Render,
) -> Result<(), CliError> {
    match args.command {
        CategoriesCommand::List { kind } => {
            let outcome = services.get_categories().call(kind.map(Into::into)).await;
            print_list(render, &util::settle(outcome, services)?)
        }

        CategoriesCommand::Get { id } => {
            let outcome = services.get_category().call(id).await;
            print_one(render, &util::settle(outcome, services)?)
        }

        CategoriesCommand::Search { query, kind } => {
            let params = SearchCategoriesParams {
                query,
                category_type: kind.map(Into::into),
            };
            let outcome = services.search_categories().call(params).await;
            print_list(render, &util::settle(outcome, services)?)
        }

        CategoriesCommand::Popular { limit } => {
            let outcome = services.popular_categories().call(limit).await;
            print_list(render, &util::settle(outcome, services)?)
        }

        CategoriesCommand::Stats { kind } => {
            let outcome = services
                .categories_with_stats()
                .call(kind.map(Into::into))
                .await;
            let list = util::settle(outcome, services)?;
            let out = output::render_list(render, &list, |c| StatsRow::from(c))?;
            output::print_output(&out, render.quiet);
            Ok(())
        }

        CategoriesCommand::Create {
            name,
            kind,
            icon,
            color,
            keywords,
        } => {
            let request = CreateCategoryRequest {
                name,
                category_type: TransactionType::from(kind),
                icon,
                color,
                keywords,
            };
            let outcome = services.create_category().call(request).await;
            let created = util::settle(outcome, services)?;
            output::notice(render, &format!("Category '{}' created", created.name));
            print_one(render, &created)
        }

        CategoriesCommand::Update {
            id,
            name,
            kind,
            icon,
            color,
            keywords,
        } => {
            let request = UpdateCategoryRequest {
                name,
                category_type: kind.map(Into::into),
                icon,
                color,
                keywords,
            };
            let outcome = services
                .update_category()
                .call(UpdateCategoryParams { id, request })
                .await;
            print_one(render, &util::settle(outcome, services)?)
        }

        CategoriesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete category '{id}'?"), global.yes)? {
                return Ok(());
            }
            util::settle(services.delete_category().call(id).await, services)?;
            output::notice(render, "Category deleted");
            Ok(())
        }
    }
}
