// Finance calculator command handlers

use crate::cli::commands::FinanceCommands;
use crate::cli::error::{user_error, validate_amount};
use crate::finance::{bond_repayment, investment_total, InterestKind};
use crate::utils::format_thousands;
use anyhow::Result;

pub fn handle_finance(cmd: FinanceCommands) -> Result<()> {
    match cmd {
        FinanceCommands::Investment { amount, rate, years, interest, json } => {
            handle_investment(amount, rate, years, interest, json)
        }
        FinanceCommands::Bond { value, rate, months, json } => handle_bond(value, rate, months, json),
    }
}

fn handle_investment(amount: f64, rate: f64, years: u32, interest: InterestKind, json: bool) -> Result<()> {
    let amount = validate_amount(amount, "amount")?;
    let rate = validate_amount(rate, "rate")?;

    let total = investment_total(amount, rate, years, interest);
    if !total.is_finite() {
        user_error("Investment total is too large to calculate.");
    }

    if json {
        let value = serde_json::json!({
            "amount": amount,
            "rate": rate,
            "years": years,
            "interest": interest,
            "total": (total * 100.0).round() / 100.0,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "Your total investment rand value after {} years with {} interest will be: {:.2}",
        years,
        interest.as_str(),
        total
    );
    Ok(())
}

fn handle_bond(value: f64, rate: f64, months: u32, json: bool) -> Result<()> {
    let value = validate_amount(value, "value")?;
    let rate = validate_amount(rate, "rate")?;

    let repayment = match bond_repayment(value, rate, months) {
        Some(repayment) => repayment,
        None => user_error("Number of months must be at least 1."),
    };
    if !repayment.is_finite() {
        user_error("Bond repayment is too large to calculate.");
    }

    if json {
        let result = serde_json::json!({
            "value": value,
            "rate": rate,
            "months": months,
            "repayment": (repayment * 100.0).round() / 100.0,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Your monthly bond repayment is: {}", format_thousands(repayment));
    Ok(())
}
