/// display configuration loaded from json, including the date fallback
use investment_projection_rs::{format_currency, format_date, format_date_with, DisplayConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let configs = [
        DisplayConfig::default(),
        DisplayConfig::from_json(r#"{"currency_code":"USD","locale_tag":"en-US"}"#)?,
        DisplayConfig::from_json(r#"{"locale_tag":"de-DE"}"#)?,
    ];

    for config in &configs {
        println!(
            "{:<6} {:>16}  {}",
            config.locale_tag,
            format_currency("1234567.891", config)?,
            format_date_with("2024-08-15T10:00:00Z", config),
        );
    }

    // unparsable dates come back untouched (a warning is logged)
    println!("{}", format_date("not-a-date"));

    // unparsable amounts are an error, never "NaN"
    if let Err(err) = format_currency("12 euros", &DisplayConfig::default()) {
        println!("rejected: {}", err);
    }

    Ok(())
}
