//! INR price formatting.
//!
//! en-IN digit grouping: the last three digits form one group, everything
//! above them is grouped in pairs - `123456` renders as `1,23,456`.

/// Format an amount with en-IN thousands separators (no currency symbol).
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    let mut formatted = groups.join(",");
    formatted.push(',');
    formatted.push_str(tail);
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(42), "42");
        assert_eq!(format_inr(999), "999");
    }

    #[test]
    fn en_in_grouping_is_three_then_twos() {
        assert_eq!(format_inr(3999), "3,999");
        assert_eq!(format_inr(59999), "59,999");
        assert_eq!(format_inr(123456), "1,23,456");
        assert_eq!(format_inr(1234567), "12,34,567");
        assert_eq!(format_inr(10000000), "1,00,00,000");
    }
}
