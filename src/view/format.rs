use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::props::AccountNumber;

/// Formats an amount the way the pages show balances: `Rs` prefix, two
/// decimal places rounded half away from zero, en-IN digit grouping
/// (last three digits, then pairs).
pub fn rupees(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("Rs {}{}.{}", sign, group_indian(int_part), frac_part)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head: Vec<char> = head.chars().collect();

    let mut groups: Vec<String> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(head[start..end].iter().collect());
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Displays an account number in blocks of four digits.
pub fn group_digits(number: &AccountNumber) -> String {
    number
        .as_str()
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use crate::{
        domain::props::AccountNumber,
        view::format::{group_digits, rupees},
    };

    #[test]
    fn rupees_pads_to_two_decimals() {
        assert_eq!(rupees(dec!(999)), "Rs 999.00");
        assert_eq!(rupees(dec!(0.5)), "Rs 0.50");
    }

    #[test]
    fn rupees_groups_en_in() {
        assert_eq!(rupees(dec!(4000)), "Rs 4,000.00");
        assert_eq!(rupees(dec!(123456.5)), "Rs 1,23,456.50");
        assert_eq!(rupees(dec!(10000000)), "Rs 1,00,00,000.00");
    }

    #[test]
    fn rupees_rounds_half_up_to_paise() {
        assert_eq!(rupees(dec!(10.005)), "Rs 10.01");
    }

    #[test]
    fn rupees_keeps_the_sign() {
        assert_eq!(rupees(dec!(-1234.56)), "Rs -1,234.56");
    }

    #[test]
    fn digits_grouped_in_fours() {
        let number = AccountNumber::from_input("123456789012").unwrap();
        assert_eq!(group_digits(&number), "1234 5678 9012");
    }
}
