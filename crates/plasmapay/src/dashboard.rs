use chrono::{DateTime, NaiveDate, NaiveDateTime};
use common::dashboard::DashboardData;
use common::transaction::Transaction;

/// One transaction row, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionLine {
    pub title: String,
    pub subtitle: String,
    pub amount: String,
    pub positive: bool,
}

/// Everything the dashboard screen shows, as display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub balance: String,
    pub lines: Vec<TransactionLine>,
    pub monthly_pill: String,
}

/// `$1,234.56`-style formatting, `-` ahead of the `$` for negatives.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let dollars: String = grouped.chars().rev().collect();

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        dollars,
        fraction
    )
}

/// `"Jan 5, 2026"`-style formatting of the backend's ISO dates. The raw
/// input is echoed back when it does not parse.
pub fn format_date(iso: &str) -> String {
    let date = DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(iso, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

fn line(transaction: &Transaction) -> TransactionLine {
    let positive = transaction.kind.is_income();
    TransactionLine {
        title: transaction.description.clone(),
        subtitle: format!(
            "{} · {}",
            format_date(&transaction.date),
            transaction.category
        ),
        amount: format!(
            "{} {}",
            if positive { "+" } else { "-" },
            format_usd(transaction.amount)
        ),
        positive,
    }
}

/// Map dashboard data to its on-screen form. Pure: no IO, no state.
pub fn render(data: &DashboardData) -> DashboardView {
    let direction = if data.monthly_net >= 0.0 { "▲" } else { "▼" };

    DashboardView {
        balance: format_usd(data.balance),
        lines: data.recent_transactions.iter().map(line).collect(),
        monthly_pill: format!(
            "{} {} this month",
            direction,
            format_usd(data.monthly_net.abs())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::transaction::TransactionKind;

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(12.5), "$12.50");
        assert_eq!(format_usd(1234.56), "$1,234.56");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-45.5), "-$45.50");
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_date("2026-01-05T12:30:00"), "Jan 5, 2026");
        assert_eq!(format_date("2026-01-05T12:30:00.123456"), "Jan 5, 2026");
        assert_eq!(format_date("2026-01-05"), "Jan 5, 2026");
        assert_eq!(format_date("last tuesday"), "last tuesday");
    }

    #[test]
    fn renders_transactions_and_pill() {
        let data = DashboardData {
            balance: 2500.0,
            recent_transactions: vec![
                Transaction {
                    id: "t1".to_string(),
                    amount: 1200.0,
                    description: "Salary".to_string(),
                    kind: TransactionKind::Income,
                    category: "work".to_string(),
                    date: "2026-03-01T09:00:00".to_string(),
                    created_at: None,
                },
                Transaction {
                    id: "t2".to_string(),
                    amount: 35.25,
                    description: "Groceries".to_string(),
                    kind: TransactionKind::Expense,
                    category: "food".to_string(),
                    date: "2026-03-02T18:15:00".to_string(),
                    created_at: None,
                },
            ],
            monthly_income: 1200.0,
            monthly_expenses: 35.25,
            monthly_net: 1164.75,
        };

        let view = render(&data);
        assert_eq!(view.balance, "$2,500.00");
        assert_eq!(view.monthly_pill, "▲ $1,164.75 this month");

        assert_eq!(view.lines[0].title, "Salary");
        assert_eq!(view.lines[0].subtitle, "Mar 1, 2026 · work");
        assert_eq!(view.lines[0].amount, "+ $1,200.00");
        assert!(view.lines[0].positive);

        assert_eq!(view.lines[1].amount, "- $35.25");
        assert!(!view.lines[1].positive);
    }

    #[test]
    fn negative_month_points_down() {
        let data = DashboardData {
            monthly_net: -80.0,
            ..Default::default()
        };
        assert_eq!(render(&data).monthly_pill, "▼ $80.00 this month");
    }
}
