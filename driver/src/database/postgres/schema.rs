use sqlx::PgConnection;

use kernel::interface::query::{DependOnSchemaQuery, SchemaQuery};
use kernel::KernelError;

use crate::database::postgres::{PostgresDatabase, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresSchemaRepository;

impl DependOnSchemaQuery for PostgresDatabase {
    type SchemaQuery = PostgresSchemaRepository;
    fn schema_query(&self) -> &Self::SchemaQuery {
        &PostgresSchemaRepository
    }
}

#[async_trait::async_trait]
impl SchemaQuery for PostgresSchemaRepository {
    type Transaction = PostgresTransaction;

    async fn table_names(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<String>, KernelError> {
        PgSchemaInternal::table_names(con).await
    }
}

pub(in crate::database) struct PgSchemaInternal;

impl PgSchemaInternal {
    async fn table_names(con: &mut PgConnection) -> error_stack::Result<Vec<String>, KernelError> {
        // information_schema columns are `sql_identifier`, cast so they decode as TEXT
        // language=postgresql
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = 'public'
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()
    }
}
