use crate::{
    AsQuery, BindPlan, Binder, Executor, Result, RowLabeled,
    stream::{Stream, StreamExt},
};
use futures::FutureExt;
use std::{future::Future, marker::PhantomData, pin::pin};

/// A type built from fetched rows through its [`Binder`].
///
/// Usually derived with `#[derive(Entity)]`.
pub trait Entity: Default + Send + Sized + 'static {
    /// Mapping table of this type, built once.
    fn binder() -> &'static Binder<Self>;

    fn from_row(row: &RowLabeled) -> Result<Self> {
        Ok(Self::binder().bind(row))
    }

    /// Run the query and bind every row.
    fn find_many<X: Executor>(
        executor: &mut X,
        query: impl AsQuery,
    ) -> impl Stream<Item = Result<Self>> + Send {
        let mut mapper = EntityMapper::<Self>::new();
        executor
            .fetch(query.as_query())
            .map(move |row| row.and_then(|row| mapper.map_row(&row)))
    }

    /// First entity returned by the query, if any.
    fn find_one<X: Executor>(
        executor: &mut X,
        query: impl AsQuery,
    ) -> impl Future<Output = Result<Option<Self>>> + Send {
        let stream = Self::find_many(executor, query);
        async move { pin!(stream).into_future().map(|(v, _)| v).await.transpose() }
    }
}

/// Per-row conversion of fetched rows.
pub trait RowMapper<T> {
    fn map_row(&mut self, row: &RowLabeled) -> Result<T>;
}

impl<T, F> RowMapper<T> for F
where
    F: FnMut(&RowLabeled) -> Result<T>,
{
    fn map_row(&mut self, row: &RowLabeled) -> Result<T> {
        self(row)
    }
}

/// [`RowMapper`] backed by the entity binder, the bind plan is computed on the
/// first row and reused while the labels stay the same.
#[derive(Debug)]
pub struct EntityMapper<E> {
    plan: Option<BindPlan>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityMapper<E> {
    pub fn new() -> Self {
        Self {
            plan: None,
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Default for EntityMapper<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> RowMapper<E> for EntityMapper<E> {
    fn map_row(&mut self, row: &RowLabeled) -> Result<E> {
        let binder = E::binder();
        let plan = match self.plan.take() {
            Some(plan) if plan.matches(&row.labels) => plan,
            _ => binder.plan(&row.labels),
        };
        let entity = binder.bind_planned(&plan, row);
        self.plan = Some(plan);
        Ok(entity)
    }
}
