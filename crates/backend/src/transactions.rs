use crate::client::Client;
use crate::error::BackendError;
use common::transaction::{
    CreatedTransaction, DeletedTransaction, NewTransaction, Transaction, TransactionKind,
};

/// Query parameters accepted by the transaction listing.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(kind) = self.kind {
            query.push(("type", kind.as_str().to_string()));
        }
        query
    }
}

impl Client {
    /// `GET /api/transactions`, newest first.
    pub async fn transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, BackendError> {
        self.expect_json(self.get("/api/transactions").query(&filter.to_query()))
            .await
    }

    /// `POST /api/transactions` - the answer carries the stored transaction
    /// and the adjusted balance.
    pub async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<CreatedTransaction, BackendError> {
        self.expect_json(self.post("/api/transactions").json(transaction))
            .await
    }

    /// `DELETE /api/transactions/{id}`.
    pub async fn delete_transaction(&self, id: &str) -> Result<DeletedTransaction, BackendError> {
        self.expect_json(self.delete(&format!("/api/transactions/{}", id)))
            .await
    }
}
