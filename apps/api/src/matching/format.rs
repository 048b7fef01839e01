use crate::models::job::{Salary, SalaryPeriod};

/// Human-readable salary range, e.g. `$120,000-160,000/year`, `$50-75/hour`
/// or `$5,000-8,000 fixed`.
pub fn format_salary(salary: &Salary) -> String {
    let symbol = currency_symbol(&salary.currency);
    match salary.period {
        SalaryPeriod::Hour => format!("{symbol}{}-{}/hour", salary.min, salary.max),
        SalaryPeriod::Year => format!(
            "{symbol}{}-{}/year",
            group_thousands(salary.min),
            group_thousands(salary.max)
        ),
        SalaryPeriod::Project => format!(
            "{symbol}{}-{} fixed",
            group_thousands(salary.min),
            group_thousands(salary.max)
        ),
    }
}

fn currency_symbol(currency: &str) -> String {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{other} "),
    }
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Shortens a wallet address to `0x1234...7890`. Short inputs are returned as-is.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
