use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing invoices, keyed by reference.
pub const CF_INVOICES: &str = "invoices";

/// A persistent invoice store backed by RocksDB.
///
/// Invoices are stored as JSON documents. `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "invoices" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_invoices = ColumnFamilyDescriptor::new(CF_INVOICES, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_invoices])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn invoices_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_INVOICES).ok_or_else(|| {
            PaymentError::InternalError(Box::new(std::io::Error::other(
                "Invoices column family not found",
            )))
        })
    }
}

fn decode(bytes: &[u8]) -> Result<Invoice> {
    serde_json::from_slice(bytes).map_err(|e| {
        PaymentError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Deserialization error: {}", e),
        )))
    })
}

#[async_trait]
impl InvoiceStore for RocksDBStore {
    async fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        let cf = self.invoices_cf()?;
        match self.db.get_cf(cf, reference.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, invoice: Invoice) -> Result<()> {
        if invoice.reference.is_empty() {
            return Ok(());
        }
        let cf = self.invoices_cf()?;
        let value = serde_json::to_vec(&invoice).map_err(|e| {
            PaymentError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;

        self.db.put_cf(cf, invoice.reference.as_bytes(), value)?;
        Ok(())
    }

    async fn all_invoices(&self) -> Result<Vec<Invoice>> {
        let cf = self.invoices_cf()?;
        let mut invoices = Vec::new();

        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            invoices.push(decode(&value)?);
        }

        Ok(invoices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::BillingType;
    use crate::domain::payment::Payment;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_INVOICES).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_invoice_store() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).unwrap();

        let invoice = Invoice::with_payments(
            "inv-1",
            dec!(10),
            BillingType::Commercial,
            vec![Payment::new("inv-1", dec!(4))],
        );
        store.save(invoice.clone()).await.unwrap();
        store
            .save(Invoice::new("", dec!(1), BillingType::Standard))
            .await
            .unwrap();

        let retrieved = store.get("inv-1").await.unwrap().unwrap();
        assert_eq!(retrieved, invoice);

        let all = store.all_invoices().await.unwrap();
        assert_eq!(all, vec![invoice]);

        assert!(store.get("inv-2").await.unwrap().is_none());
    }
}
