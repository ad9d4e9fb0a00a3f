// ============================================================================
// Basic Usage Example
// ============================================================================

use bignumber::prelude::*;

fn main() -> Result<(), BigNumberError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== BigNumber Example ===\n");

    let cfg = Config::new()
        .with_decimal_places(30)?
        .with_rounding_mode(RoundingMode::HalfEven);

    // Exact decimal arithmetic
    let a = BigNumber::parse("0.1", &cfg)?;
    let b = BigNumber::parse("0.2", &cfg)?;
    println!("0.1 + 0.2 = {}", a.plus(&b, &cfg));
    println!("0.1 * 0.2 = {}", a.times(&b, &cfg));

    // Rounded operations
    let two = BigNumber::from(2);
    println!("\n=== Rounded Operations (30 places, HalfEven) ===");
    println!("1 / 3     = {}", BigNumber::one().div(&BigNumber::from(3), &cfg));
    println!("sqrt(2)   = {}", two.square_root(&cfg));
    println!("2^-10     = {}", two.to_power(-10.0, &cfg));
    println!("2^0.5     = {} (f64 accuracy)", two.to_power(0.5, &cfg));

    // Formatting
    let amount = BigNumber::parse("-1234567.8949", &cfg)?;
    println!("\n=== Formatting {} ===", amount);
    println!("to_fixed(2)       = {}", amount.to_fixed(Some(2), None, &cfg)?);
    println!("to_exponential(3) = {}", amount.to_exponential(Some(3), None, &cfg)?);
    println!("to_precision(4)   = {}", amount.to_precision(Some(4), None, &cfg)?);
    println!("to_format(2)      = {}", amount.to_format(Some(2), None, &cfg)?);
    println!("base 16           = {}", amount.to_string_base(16, &cfg)?);

    // Rational approximation
    let pi = BigNumber::parse("3.14159265358979323846", &cfg)?;
    for max in [10, 1000, 100000] {
        let f = pi.to_fraction(Some(&BigNumber::from(max)), &cfg)?;
        println!("pi with denominator <= {:>6}: {}", max, f);
    }

    // Lenient parsing folds malformed literals into NaN
    let lenient = cfg.clone().with_errors(false);
    println!("\n=== Lenient Parsing ===");
    println!("'12abc' -> {}", BigNumber::parse("12abc", &lenient)?);
    match BigNumber::parse("12abc", &cfg) {
        Ok(x) => println!("'12abc' -> {}", x),
        Err(e) => println!("strict: {}", e),
    }

    // Random values
    let secure = cfg.clone().with_crypto(true);
    println!("\n=== Random ===");
    println!("random(10)        = {}", BigNumber::random(Some(10), &cfg)?);
    println!("secure random(10) = {}", BigNumber::random(Some(10), &secure)?);

    Ok(())
}
