use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default = "default_category")]
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_category() -> String {
    "uncategorized".to_string()
}

#[derive(Serialize, Debug, Clone)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreatedTransaction {
    pub transaction: Transaction,
    pub new_balance: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DeletedTransaction {
    pub message: String,
    pub new_balance: f64,
}
