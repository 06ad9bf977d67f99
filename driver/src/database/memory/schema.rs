use kernel::interface::query::{DependOnSchemaQuery, SchemaQuery};
use kernel::KernelError;

use crate::database::memory::{InMemoryDatabase, InMemoryTransaction};

const BOOK_TABLE: &str = "books";

pub struct InMemorySchemaRepository;

impl DependOnSchemaQuery for InMemoryDatabase {
    type SchemaQuery = InMemorySchemaRepository;
    fn schema_query(&self) -> &Self::SchemaQuery {
        &InMemorySchemaRepository
    }
}

#[async_trait::async_trait]
impl SchemaQuery for InMemorySchemaRepository {
    type Transaction = InMemoryTransaction;

    async fn table_names(
        &self,
        _con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<String>, KernelError> {
        Ok(vec![BOOK_TABLE.to_string()])
    }
}
