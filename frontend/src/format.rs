/// Groups an integer with commas: `2400000` -> `"2,400,000"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount with separators, e.g. `"$15,000"`.
pub fn dollars(value: f64) -> String {
    format!("${}", thousands(value.max(0.0).round() as u64))
}

/// Dollars and cents, e.g. `"$107.50"`.
pub fn cents(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(147), "147");
        assert_eq!(thousands(2_400_000), "2,400,000");
    }

    #[test]
    fn money_and_percent() {
        assert_eq!(dollars(15000.0), "$15,000");
        assert_eq!(cents(107.5), "$107.50");
        assert_eq!(percent(66.666, 1), "66.7%");
        assert_eq!(percent(50.0, 0), "50%");
    }
}
