// ============================================================================
// Basic Usage Example
// ============================================================================

use financial_calculator::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    println!("=== Financial Calculator Example ===\n");

    let reporter = Arc::new(CollectingErrorReporter::new());
    let calc = CalculatorBuilder::brazil()
        .with_reporter(reporter.clone())
        .build()
        .expect("bundled configuration is valid");

    // Statistics over text tokens
    let sales = ["120", "95", "140", "95", "180", "110"];
    println!("Sales: {:?}", sales);
    println!("  mean:    {:.2}", calc.mean(&sales));
    println!("  median:  {:.2}", calc.median(&sales));
    println!("  mode:    {:?}", calc.mode(&sales));
    println!("  std dev: {:.2} (sample)", calc.standard_deviation(&sales, BooleanValue::False));
    println!("  range:   {}", calc.range(&sales));
    println!("  sum:     {}\n", calc.sum(&sales));

    // Loans and investments
    println!("Loan of 250,000 at 6.5% over 30 years");
    println!("  monthly payment: {:.2}\n", calc.monthly_payment(250_000.0, 6.5, 30));

    let fv = calc.future_value(10_000.0, 8.0, 10);
    println!("10,000 at 8% for 10 years");
    println!("  future value:  {:.2}", fv);
    println!("  present value: {:.2}", calc.present_value(fv, 8.0, 10));
    println!("  ROI:           {:.2}%", calc.return_on_investment(10_000.0, fv));
    println!(
        "  NPV of [3000, 4000, 5000] at 10%: {:.2}\n",
        calc.net_present_value(&["3000", "4000", "5000"], 0.1)
    );

    // Formatting
    println!("Formatting");
    for currency in Currency::ALL {
        println!(
            "  {}: {} / {}",
            currency,
            calc.format_currency_for(1_234_567, currency),
            calc.format_money(Decimal::new(123_456_789, 2), currency)
        );
    }
    println!("  default: {}\n", calc.format_money_default(Decimal::new(4999, 2)));

    // Recoverable failures
    println!("Bad input");
    println!("  sum of [1, x]: {}", calc.sum(&["1", "x"]));
    println!("  format with 'ptBR': {:?}", calc.format_currency(10, "ptBR"));
    for message in reporter.messages() {
        println!("  reported: {}", message);
    }
}
