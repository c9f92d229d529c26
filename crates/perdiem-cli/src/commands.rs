//! Subcommand dispatch and input validation.
//!
//! All user input is validated here, before it reaches the engine: amounts
//! must parse as positive finite numbers, dates and months must be valid
//! calendar values. The engine itself never sees malformed input.

use chrono::NaiveDate;
use colored::Colorize;
use uuid::Uuid;

use perdiem_core::{AllocationService, Clock, SystemClock};
use perdiem_domain::{Category, Expense, MonthKey};

use crate::{context::AppContext, format, CliError};

const HELP: &str = "\
perdiem — dynamic daily spending targets

USAGE:
    perdiem <command> [args]

COMMANDS:
    add <date> <amount> <category> [description]   record an expense
    remove <date> <id>                             delete an expense by id
    list <date>                                    show a day's expenses
    set-budget <month> <amount>                    set a month's budget
    offset-budget <month> <delta>                  adjust a month's budget
    default-budget <amount>|off                    set or clear the fallback budget
    status [date]                                  day total, target, classification
    month [month]                                  monthly budget, spent, remaining
    close                                          close elapsed months
    help                                           show this message

Dates are YYYY-MM-DD, months are YYYY-MM. Defaults are today's date/month.";

/// Parses `args` and executes the matching command.
pub fn run_cli(args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.first() else {
        println!("{HELP}");
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "add" => add(rest),
        "remove" => remove(rest),
        "list" => list(rest),
        "set-budget" => set_budget(rest),
        "offset-budget" => offset_budget(rest),
        "default-budget" => default_budget(rest),
        "status" => status(rest),
        "month" => month_summary(rest),
        "close" => close(),
        "help" | "--help" | "-h" => {
            println!("{HELP}");
            Ok(())
        }
        other => Err(CliError::usage(format!(
            "unknown command `{other}` (try `perdiem help`)"
        ))),
    }
}

fn add(args: &[String]) -> Result<(), CliError> {
    let [date, amount, category, description @ ..] = args else {
        return Err(CliError::usage(
            "usage: perdiem add <date> <amount> <category> [description]",
        ));
    };
    let date = parse_date(date)?;
    let amount = parse_positive_amount(amount)?;
    let category = Category::from_label(category);
    let description = description.join(" ");

    let mut ctx = AppContext::open()?;
    let expense = Expense::new(amount, category, description);
    let id = expense.id;
    ctx.ledger.add_expense(date, expense);
    ctx.save_ledger()?;

    println!(
        "Recorded {} for {} on {} ({})",
        format::amount(amount, &ctx.config.currency),
        category,
        date,
        id
    );
    Ok(())
}

fn remove(args: &[String]) -> Result<(), CliError> {
    let [date, id] = args else {
        return Err(CliError::usage("usage: perdiem remove <date> <id>"));
    };
    let date = parse_date(date)?;
    let id: Uuid = id
        .parse()
        .map_err(|_| CliError::usage(format!("`{id}` is not a valid expense id")))?;

    let mut ctx = AppContext::open()?;
    match ctx.ledger.remove_expense(date, id) {
        Some(removed) => {
            ctx.save_ledger()?;
            println!(
                "Removed {} ({}) from {}",
                format::amount(removed.amount, &ctx.config.currency),
                removed.category,
                date
            );
            Ok(())
        }
        None => Err(CliError::usage(format!("no expense `{id}` on {date}"))),
    }
}

fn list(args: &[String]) -> Result<(), CliError> {
    let [date] = args else {
        return Err(CliError::usage("usage: perdiem list <date>"));
    };
    let date = parse_date(date)?;

    let ctx = AppContext::open()?;
    let expenses = ctx.ledger.expenses_on(date);
    if expenses.is_empty() {
        println!("No expenses on {date}");
        return Ok(());
    }
    for expense in expenses {
        println!(
            "{}  {:>10}  {:<13} {}",
            expense.id,
            format::amount(expense.amount, &ctx.config.currency),
            expense.category.to_string(),
            expense.description
        );
    }
    println!(
        "Total: {}",
        format::amount(ctx.ledger.day_total(date), &ctx.config.currency).bold()
    );
    Ok(())
}

fn set_budget(args: &[String]) -> Result<(), CliError> {
    let [month, amount] = args else {
        return Err(CliError::usage("usage: perdiem set-budget <month> <amount>"));
    };
    let month = parse_month(month)?;
    let amount = parse_non_negative_amount(amount)?;

    let mut ctx = AppContext::open()?;
    ctx.budgets = ctx.budgets.with_month_budget(month, amount);
    ctx.save_budgets()?;

    println!(
        "Budget for {} set to {}",
        month,
        format::amount(ctx.budgets.effective_budget(month), &ctx.config.currency)
    );
    Ok(())
}

fn offset_budget(args: &[String]) -> Result<(), CliError> {
    let [month, delta] = args else {
        return Err(CliError::usage(
            "usage: perdiem offset-budget <month> <delta>",
        ));
    };
    let month = parse_month(month)?;
    let delta = parse_finite_amount(delta)?;

    let mut ctx = AppContext::open()?;
    ctx.budgets = ctx.budgets.with_month_offset(month, delta);
    ctx.save_budgets()?;

    println!(
        "Budget for {} is now {}",
        month,
        format::amount(ctx.budgets.effective_budget(month), &ctx.config.currency)
    );
    Ok(())
}

fn default_budget(args: &[String]) -> Result<(), CliError> {
    let [value] = args else {
        return Err(CliError::usage(
            "usage: perdiem default-budget <amount>|off",
        ));
    };

    let mut ctx = AppContext::open()?;
    if value == "off" {
        ctx.budgets = ctx.budgets.with_default_budget(None);
        ctx.save_budgets()?;
        println!("Default budget disabled");
        return Ok(());
    }
    let amount = parse_non_negative_amount(value)?;
    ctx.budgets = ctx.budgets.with_default_budget(Some(amount));
    ctx.save_budgets()?;
    println!(
        "Default budget set to {}",
        format::amount(amount, &ctx.config.currency)
    );
    Ok(())
}

fn status(args: &[String]) -> Result<(), CliError> {
    let date = match args {
        [] => SystemClock.today(),
        [date] => parse_date(date)?,
        _ => return Err(CliError::usage("usage: perdiem status [date]")),
    };

    let ctx = AppContext::open()?;
    let report = AllocationService::day_report(&ctx.ledger, &ctx.budgets, &ctx.snapshots, date);

    println!("Date:         {}", report.date);
    println!(
        "Spent:        {}",
        format::amount(report.total, &ctx.config.currency)
    );
    println!(
        "Daily target: {}",
        format::amount(report.target, &ctx.config.currency)
    );
    println!("Status:       {}", format::status_label(report.status));
    Ok(())
}

fn month_summary(args: &[String]) -> Result<(), CliError> {
    let month = match args {
        [] => MonthKey::from_date(SystemClock.today()),
        [month] => parse_month(month)?,
        _ => return Err(CliError::usage("usage: perdiem month [month]")),
    };

    let ctx = AppContext::open()?;
    let currency = &ctx.config.currency;
    if let Some(snapshot) = ctx.snapshots.closed(month) {
        println!("Month:     {month} (closed)");
        println!("Budget:    {}", format::amount(snapshot.budget, currency));
        println!("Spent:     {}", format::amount(snapshot.spent, currency));
        println!(
            "Remaining: {}",
            format::amount(snapshot.budget - snapshot.spent, currency)
        );
        return Ok(());
    }

    let budget = AllocationService::effective_month_budget(&ctx.budgets, month);
    let spent = AllocationService::monthly_spent(&ctx.ledger, month);
    println!("Month:     {month}");
    println!("Budget:    {}", format::amount(budget, currency));
    println!("Spent:     {}", format::amount(spent, currency));
    println!("Remaining: {}", format::amount(budget - spent, currency));
    Ok(())
}

fn close() -> Result<(), CliError> {
    // AppContext::open already ran the closing pass and persisted it.
    let ctx = AppContext::open()?;
    let closed = ctx
        .snapshots
        .months
        .iter()
        .filter(|(_, snapshot)| snapshot.closed)
        .count();
    println!("{closed} closed month(s) on record");
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    raw.parse()
        .map_err(|_| CliError::usage(format!("`{raw}` is not a valid date (expected YYYY-MM-DD)")))
}

fn parse_month(raw: &str) -> Result<MonthKey, CliError> {
    raw.parse()
        .map_err(|_| CliError::usage(format!("`{raw}` is not a valid month (expected YYYY-MM)")))
}

fn parse_finite_amount(raw: &str) -> Result<f64, CliError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| CliError::usage(format!("`{raw}` is not a number")))?;
    if !value.is_finite() {
        return Err(CliError::usage(format!("`{raw}` is not a finite amount")));
    }
    Ok(value)
}

fn parse_non_negative_amount(raw: &str) -> Result<f64, CliError> {
    let value = parse_finite_amount(raw)?;
    if value < 0.0 {
        return Err(CliError::usage("amount must not be negative"));
    }
    Ok(value)
}

fn parse_positive_amount(raw: &str) -> Result<f64, CliError> {
    let value = parse_finite_amount(raw)?;
    if value <= 0.0 {
        return Err(CliError::usage("amount must be positive"));
    }
    Ok(value)
}
