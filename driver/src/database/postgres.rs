use std::num::NonZeroU32;
use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

use crate::{env, env_parsed};
use crate::error::ConvertError;

pub use self::{book::*, schema::*};

mod book;
mod schema;

static POSTGRES_URL: &str = "POSTGRES_URL";
static POSTGRES_MAX_CONNECTIONS: &str = "POSTGRES_MAX_CONNECTIONS";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let max_connections = env_parsed::<NonZeroU32>(POSTGRES_MAX_CONNECTIONS)?
            .map_or(DEFAULT_MAX_CONNECTIONS, NonZeroU32::get);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&url)
            .await
            .convert_error()
            .attach_printable("Failed to connect to postgres")?;
        tracing::info!(max_connections, "Connected to postgres");
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::RowNotFound => Report::from(error).change_context(KernelError::NotFound),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}

#[cfg(test)]
pub(in crate::database) async fn prepare_table(
    con: &mut PostgresTransaction,
) -> error_stack::Result<(), KernelError> {
    // language=postgresql
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id       TEXT PRIMARY KEY,
            title    TEXT    NOT NULL,
            author   TEXT    NOT NULL,
            quantity INTEGER NOT NULL
        )
        "#,
    )
    .execute(&mut **con)
    .await
    .convert_error()?;
    Ok(())
}
