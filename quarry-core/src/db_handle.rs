use crate::{
    AsQuery, AsValue, Connection, Entity, EntityMapper, Executor, PaginationList, Result,
    RowLabeled, RowMapper, Select, Statement, Transaction, check_page, count_statement,
    page_statement, stream::TryStreamExt, truncate_long,
};
use std::pin::pin;

/// Database access handle, constructed once and passed to whoever needs the database.
///
/// Wraps an [`Executor`] with the usual one-call helpers: scalar reads,
/// entity lists, pagination and transactional batches. Every statement is
/// logged at debug level before being sent.
#[derive(Debug)]
pub struct DbHandle<X: Executor> {
    executor: X,
}

impl<X: Executor> DbHandle<X> {
    pub fn new(executor: X) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &X {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut X {
        &mut self.executor
    }

    pub fn into_inner(self) -> X {
        self.executor
    }

    fn perform(query: impl AsQuery) -> String {
        let query = query.as_query();
        log::debug!("Performing: {}", truncate_long!(query.as_str()));
        query
    }

    async fn first_row(&mut self, query: impl AsQuery) -> Result<Option<RowLabeled>> {
        let stream = self.executor.fetch(Self::perform(query));
        pin!(stream).try_next().await
    }

    /// Run a modify statement, returns the number of rows affected.
    pub async fn execute_sql(&mut self, query: impl AsQuery) -> Result<u64> {
        Ok(self
            .executor
            .execute(Self::perform(query))
            .await?
            .rows_affected)
    }

    /// Run an insert statement, returns the row id of the new row when reported.
    pub async fn execute_insert(&mut self, query: impl AsQuery) -> Result<Option<i64>> {
        Ok(self
            .executor
            .execute(Self::perform(query))
            .await?
            .last_affected_id)
    }

    /// Every column of the first row as integer, `None` when there is no row.
    ///
    /// Null cells read as `0`.
    pub async fn get_ints(&mut self, query: impl AsQuery) -> Result<Option<Vec<i64>>> {
        let Some(row) = self.first_row(query).await? else {
            return Ok(None);
        };
        row.values
            .into_vec()
            .into_iter()
            .map(|v| Ok(Option::<i64>::try_from_value(v)?.unwrap_or_default()))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// First column of the first row as integer.
    pub async fn get_int(&mut self, query: impl AsQuery) -> Result<Option<i64>> {
        Ok(self
            .get_ints(query)
            .await?
            .and_then(|v| v.into_iter().next()))
    }

    /// Like [`DbHandle::get_int`], errors are logged and give `default`.
    pub async fn get_int_or(&mut self, query: impl AsQuery, default: i64) -> i64 {
        match self.get_int(query).await {
            Ok(v) => v.unwrap_or(default),
            Err(e) => {
                log::error!("{e:#}");
                default
            }
        }
    }

    /// Every column of the first row as text, `None` when there is no row.
    ///
    /// Null cells read as the empty string.
    pub async fn get_strings(&mut self, query: impl AsQuery) -> Result<Option<Vec<String>>> {
        let Some(row) = self.first_row(query).await? else {
            return Ok(None);
        };
        row.values
            .into_vec()
            .into_iter()
            .map(|v| Ok(Option::<String>::try_from_value(v)?.unwrap_or_default()))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    pub async fn get_string(&mut self, query: impl AsQuery) -> Result<Option<String>> {
        Ok(self
            .get_strings(query)
            .await?
            .and_then(|v| v.into_iter().next()))
    }

    pub async fn get_string_or(&mut self, query: impl AsQuery, default: &str) -> String {
        match self.get_string(query).await {
            Ok(Some(v)) => v,
            Ok(None) => default.to_owned(),
            Err(e) => {
                log::error!("{e:#}");
                default.to_owned()
            }
        }
    }

    /// Whether the query returns at least one row.
    pub async fn check_if_exists(&mut self, query: impl AsQuery) -> Result<bool> {
        Ok(self.first_row(query).await?.is_some())
    }

    /// Last id handed out by the autoincrement sequence of `table`, `0` if none.
    pub async fn last_insert_row_id(&mut self, table: &str) -> Result<i64> {
        let query = Select::produce(["seq"])
            .from(["sqlite_sequence"])
            .where_("name")
            .eq(table);
        Ok(self.get_int(query).await?.unwrap_or(0))
    }

    pub async fn get_list<E: Entity>(&mut self, query: impl AsQuery) -> Result<Vec<E>> {
        self.get_list_with(query, EntityMapper::<E>::new()).await
    }

    pub async fn get_list_with<T>(
        &mut self,
        query: impl AsQuery,
        mut mapper: impl RowMapper<T>,
    ) -> Result<Vec<T>> {
        let stream = self.executor.fetch(Self::perform(query));
        let mut stream = pin!(stream);
        let mut result = Vec::new();
        while let Some(row) = stream.try_next().await? {
            result.push(mapper.map_row(&row)?);
        }
        Ok(result)
    }

    /// Entity from the first row, `None` when there is no row.
    pub async fn get_entity<E: Entity>(&mut self, query: impl AsQuery) -> Result<Option<E>> {
        self.get_entity_with(query, EntityMapper::<E>::new()).await
    }

    pub async fn get_entity_with<T>(
        &mut self,
        query: impl AsQuery,
        mut mapper: impl RowMapper<T>,
    ) -> Result<Option<T>> {
        self.first_row(query)
            .await?
            .map(|row| mapper.map_row(&row))
            .transpose()
    }

    /// Page `page_no` (1-based) of `statement`, `page_size` entities per page.
    ///
    /// Counts the rows of the whole statement first, no page query is sent
    /// when there are none.
    pub async fn get_pagination_list<E: Entity>(
        &mut self,
        statement: &Statement,
        page_no: u64,
        page_size: u64,
    ) -> Result<PaginationList<E>> {
        self.get_pagination_list_with(statement, page_no, page_size, EntityMapper::<E>::new())
            .await
    }

    pub async fn get_pagination_list_with<T>(
        &mut self,
        statement: &Statement,
        page_no: u64,
        page_size: u64,
        mapper: impl RowMapper<T>,
    ) -> Result<PaginationList<T>> {
        check_page(page_no, page_size)?;
        let total = self
            .get_int(count_statement(statement))
            .await?
            .unwrap_or(0)
            .max(0) as u64;
        if total == 0 {
            return Ok(PaginationList::with_pagination(page_no, page_size, 0));
        }
        let items = self
            .get_list_with(page_statement(statement, page_no, page_size), mapper)
            .await?;
        Ok(PaginationList::from_items(items, page_no, page_size, total))
    }
}

impl<X: Connection> DbHandle<X> {
    /// Run the statement produced by `operator` for every item, all in one transaction.
    ///
    /// Returns `false` without touching the database when there are no items.
    /// The first failing statement rolls the transaction back and its error is returned.
    pub async fn execute_batch<T, Q, F>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        mut operator: F,
    ) -> Result<bool>
    where
        F: FnMut(&T) -> Q,
        Q: AsQuery,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return Ok(false);
        }
        let mut transaction = self.executor.begin().await?;
        for item in items {
            let query = Self::perform(operator(&item));
            if let Err(e) = transaction.execute(query).await {
                log::error!("Batch statement failed, rolling back: {e:#}");
                if let Err(rollback) = transaction.rollback().await {
                    log::error!("Rollback failed: {rollback:#}");
                }
                return Err(e);
            }
        }
        transaction.commit().await?;
        Ok(true)
    }
}
