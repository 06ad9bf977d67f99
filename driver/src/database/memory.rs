use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::Book;
use kernel::KernelError;

pub use self::{book::*, schema::*};

mod book;
mod schema;

/// Ephemeral store keeping books in insertion order.
///
/// Transactions are serialized: [`InMemoryTransaction`] holds the lock for its
/// whole lifetime. Reads go straight through the guard; the first write stages
/// a copy, which replaces the committed collection only on
/// [`Transaction::commit`].
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    books: Arc<Mutex<Vec<Book>>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let committed = Arc::clone(&self.books).lock_owned().await;
        Ok(InMemoryTransaction {
            committed,
            staged: None,
        })
    }
}

pub struct InMemoryTransaction {
    committed: OwnedMutexGuard<Vec<Book>>,
    staged: Option<Vec<Book>>,
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self {
            mut committed,
            staged,
        } = self;
        if let Some(staged) = staged {
            *committed = staged;
        }
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl Deref for InMemoryTransaction {
    type Target = Vec<Book>;
    fn deref(&self) -> &Self::Target {
        self.staged.as_ref().unwrap_or(&*self.committed)
    }
}

impl DerefMut for InMemoryTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        let committed = &self.committed;
        self.staged.get_or_insert_with(|| committed.to_vec())
    }
}
