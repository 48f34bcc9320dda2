//! Currency and filename formatting for proposal documents.

/// Format a monetary amount for display.
///
/// INR uses the Indian numbering system: the last three digits form one
/// group, every group above that has two digits (3,200,000 becomes
/// "INR 32,00,000"). Other currencies get plain western thousands grouping.
/// The currency code is used instead of a symbol because the PDF's builtin
/// fonts are WinAnsi-encoded and cannot carry the rupee sign.
pub fn format_currency(amount: i64, currency: &str) -> String {
    let grouped = if currency == "INR" {
        group_indian(amount.unsigned_abs())
    } else {
        group_thousands(amount.unsigned_abs())
    };
    let sign = if amount < 0 { "-" } else { "" };
    format!("{currency} {sign}{grouped}")
}

fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Derive a download filename from an evaluation name.
///
/// Keeps alphanumerics, `-`, `_` and `.`; whitespace runs collapse to a
/// single `-`; everything else is stripped. Falls back to "proposal" when
/// nothing survives.
pub fn proposal_filename(evaluation_name: &str) -> String {
    let mut stem = String::with_capacity(evaluation_name.len());
    let mut pending_separator = false;
    for c in evaluation_name.trim().chars() {
        if c.is_whitespace() {
            pending_separator = !stem.is_empty();
        } else if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            if pending_separator {
                stem.push('-');
                pending_separator = false;
            }
            stem.push(c);
        }
    }

    if stem.is_empty() {
        stem.push_str("proposal");
    }
    format!("{stem}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_uses_indian_grouping() {
        assert_eq!(format_currency(3_200_000, "INR"), "INR 32,00,000");
        assert_eq!(format_currency(2_400_000, "INR"), "INR 24,00,000");
        assert_eq!(format_currency(150_000, "INR"), "INR 1,50,000");
        assert_eq!(format_currency(12_34_56_789, "INR"), "INR 12,34,56,789");
        assert_eq!(format_currency(999, "INR"), "INR 999");
        assert_eq!(format_currency(0, "INR"), "INR 0");
    }

    #[test]
    fn other_currencies_use_thousands_grouping() {
        assert_eq!(format_currency(3_200_000, "USD"), "USD 3,200,000");
        assert_eq!(format_currency(999, "USD"), "USD 999");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_groups() {
        assert_eq!(format_currency(-150_000, "INR"), "INR -1,50,000");
    }

    #[test]
    fn filenames_keep_safe_characters_only() {
        assert_eq!(proposal_filename("North Field Survey"), "North-Field-Survey.pdf");
        assert_eq!(proposal_filename("plot_7.rev-2"), "plot_7.rev-2.pdf");
        assert_eq!(proposal_filename("a/b\\c:d*e"), "abcde.pdf");
        assert_eq!(proposal_filename("  spaced   out  "), "spaced-out.pdf");
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(proposal_filename(""), "proposal.pdf");
        assert_eq!(proposal_filename("///"), "proposal.pdf");
    }
}
