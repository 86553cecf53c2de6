/// quick start - project returns and show them in french
use investment_projection_rs::{calculate_returns, format_currency_default, Decimal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 1 000 € at 7% a month for a year
    let returns = calculate_returns(Decimal::from(1_000), Decimal::from(7), 12)?;

    println!("monthly: {}", format_currency_default(returns.monthly_return)?);
    println!("total:   {}", format_currency_default(returns.total_return)?);

    Ok(())
}
