use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::KernelError;

/// Store introspection. Not part of the book domain.
#[async_trait::async_trait]
pub trait SchemaQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn table_names(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<String>, KernelError>;
}

pub trait DependOnSchemaQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type SchemaQuery: SchemaQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn schema_query(&self) -> &Self::SchemaQuery;
}
