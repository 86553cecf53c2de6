/// month-by-month projection under both rate conventions
use investment_projection_rs::{
    effective_annual_yield, format_currency_default, format_rate, DisplayConfig, RateBasis,
    ReturnCalculator,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let calculator = ReturnCalculator::new();
    let quote = calculator.quote(dec!(25000), dec!(8.5), 24)?;
    let config = DisplayConfig::default();

    println!("annual rate {} over {} months", format_rate(quote.yield_rate(), &config)?, quote.duration_months());
    for row in calculator.schedule(&quote, RateBasis::Annual) {
        println!(
            "{:>3}  {:>14}  {:>14}",
            row.month,
            format_currency_default(row.yield_amount)?,
            format_currency_default(row.balance)?,
        );
    }

    println!("expected yield: {}", format_currency_default(calculator.expected_yield(&quote))?);

    let effective = effective_annual_yield(quote.yield_rate(), 12)?;
    println!("compounded monthly that would be {}", format_rate(effective, &config)?);

    // json view for the presentation layer
    println!("{}", serde_json::to_string_pretty(&calculator.returns(&quote))?);

    Ok(())
}
