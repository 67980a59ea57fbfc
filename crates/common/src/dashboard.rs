use crate::transaction::Transaction;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DashboardData {
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub recent_transactions: Vec<Transaction>,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_expenses: f64,
    #[serde(default)]
    pub monthly_net: f64,
}
