use std::fmt;

/// Money amounts are plain floats, as entered in the budget form.
/// Entry amounts are never negative; totals can be.
pub type Amount = f64;

/// Format an amount with two decimals.
/// Example: 1000.0 -> "1000.00", 12.5 -> "12.50"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Format a net total with an explicit sign.
/// Example: 600.0 -> "+600.00", -25.5 -> "-25.50"
pub fn format_signed_total(total: Amount) -> String {
    if total < 0.0 {
        format_amount(total)
    } else {
        format!("+{}", format_amount(total))
    }
}

/// Parse a raw form value into an amount.
/// Example: "400" -> 400.0, " 12.5 " -> 12.5
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Missing);
    }

    let amount: Amount = input.parse().map_err(|_| ParseAmountError::InvalidFormat)?;
    if !amount.is_finite() {
        return Err(ParseAmountError::InvalidFormat);
    }
    if amount < 0.0 {
        return Err(ParseAmountError::Negative);
    }

    Ok(amount)
}

/// Expense as a percentage of income.
///
/// Undefined (`None`) when there is no income to compare against.
pub fn expense_percentage(expense: Amount, total_income: Amount) -> Option<f64> {
    if total_income > 0.0 {
        Some(expense * 100.0 / total_income)
    } else {
        None
    }
}

/// Format a percentage with one decimal, or "--" when undefined.
/// Example: Some(40.0) -> "40.0 %"
pub fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(p) => format!("{:.1} %", p),
        None => "--".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Missing,
    InvalidFormat,
    Negative,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Missing => write!(f, "amount is required"),
            ParseAmountError::InvalidFormat => write!(f, "invalid money format"),
            ParseAmountError::Negative => write!(f, "amount cannot be negative"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
