use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnSchemaQuery, SchemaQuery};
use kernel::KernelError;

#[async_trait::async_trait]
pub trait GetTableNameService: 'static + Sync + Send + DependOnSchemaQuery {
    async fn get_table_names(&self) -> error_stack::Result<Vec<String>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.schema_query().table_names(&mut connection).await
    }
}

impl<T> GetTableNameService for T where T: DependOnSchemaQuery {}
