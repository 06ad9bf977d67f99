use error_stack::Report;

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::memory::{InMemoryDatabase, InMemoryTransaction};

pub struct InMemoryBookRepository;

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.to_vec())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.iter().find(|book| book.id() == id).cloned())
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        if con.iter().any(|stored| stored.id() == book.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Book id `{}` already exists", book.id())));
        }
        con.push(book.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<u64, KernelError> {
        let Some(index) = con.iter().position(|stored| stored.id() == book.id()) else {
            return Ok(0);
        };
        con[index] = book.clone();
        Ok(1)
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<u64, KernelError> {
        let Some(index) = con.iter().position(|stored| stored.id() == book_id) else {
            return Ok(0);
        };
        con.remove(index);
        Ok(1)
    }
}
