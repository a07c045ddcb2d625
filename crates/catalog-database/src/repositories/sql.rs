//! Generic SQL repository.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::Repository;

use super::table::Table;
use crate::error::map_db_error;

/// SQL text for one table, rendered once per repository.
#[derive(Debug, Clone)]
struct Statements {
    select_all: String,
    select_by_id: String,
    insert: String,
    insert_with_id: String,
    update: String,
    delete: String,
}

impl Statements {
    fn for_table(table: &str, columns: &[&str]) -> Self {
        let column_list = columns.join(", ");
        let placeholders = vec!["?"; columns.len()].join(", ");
        let assignments = columns
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            select_all: format!("SELECT id, {column_list} FROM {table} ORDER BY id"),
            select_by_id: format!("SELECT id, {column_list} FROM {table} WHERE id = ?"),
            insert: format!("INSERT INTO {table} ({column_list}) VALUES ({placeholders})"),
            insert_with_id: format!(
                "INSERT INTO {table} (id, {column_list}) VALUES (?, {placeholders})"
            ),
            update: format!("UPDATE {table} SET {assignments} WHERE id = ?"),
            delete: format!("DELETE FROM {table} WHERE id = ?"),
        }
    }
}

/// CRUD repository over the table described by `T`.
pub struct SqlRepository<T> {
    pool: SqlitePool,
    statements: Statements,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Table> SqlRepository<T> {
    /// Create a new repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            statements: Statements::for_table(T::TABLE, T::COLUMNS),
            _entity: PhantomData,
        }
    }
}

impl<T> Clone for SqlRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            statements: self.statements.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Table> fmt::Debug for SqlRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlRepository")
            .field("table", &T::TABLE)
            .finish()
    }
}

#[async_trait]
impl<T: Table> Repository<T> for SqlRepository<T> {
    async fn get_all(&self) -> AppResult<Vec<T>> {
        sqlx::query_as::<_, T>(&self.statements.select_all)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(&format!("list {}s", T::NAME), e))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<T>> {
        sqlx::query_as::<_, T>(&self.statements.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(&format!("find {}", T::NAME), e))
    }

    async fn create(&self, entity: &T) -> AppResult<T> {
        let query = if entity.is_transient() {
            entity.bind_columns(sqlx::query(&self.statements.insert))?
        } else {
            entity.bind_columns(sqlx::query(&self.statements.insert_with_id).bind(entity.id()))?
        };

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(&format!("create {}", T::NAME), e))?;

        let mut stored = entity.clone();
        if stored.is_transient() {
            let id = i32::try_from(result.last_insert_rowid()).map_err(|_| {
                AppError::database(format!("{} identity out of range", T::NAME))
            })?;
            stored.set_id(id);
        }

        info!(entity = T::NAME, id = stored.id(), "Created");
        Ok(stored)
    }

    async fn update(&self, entity: &T) -> AppResult<()> {
        let result = entity
            .bind_columns(sqlx::query(&self.statements.update))?
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(&format!("update {}", T::NAME), e))?;

        if result.rows_affected() == 0 {
            debug!(entity = T::NAME, id = entity.id(), "Update matched no rows");
        } else {
            info!(entity = T::NAME, id = entity.id(), "Updated");
        }
        Ok(())
    }

    async fn delete(&self, entity: &T) -> AppResult<()> {
        let result = sqlx::query(&self.statements.delete)
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(&format!("delete {}", T::NAME), e))?;

        // Deleting must affect exactly the loaded row.
        if result.rows_affected() == 0 {
            return Err(AppError::database(format!(
                "Failed to delete {}: no row with id {}",
                T::NAME,
                entity.id()
            )));
        }

        info!(entity = T::NAME, id = entity.id(), "Deleted");
        Ok(())
    }
}
