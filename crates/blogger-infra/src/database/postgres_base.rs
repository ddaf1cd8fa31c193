use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn,
    PrimaryKeyTrait,
};
use uuid::Uuid;

use blogger_core::error::RepoError;
use blogger_core::ports::BaseRepository;

/// Conversion between a domain entity and its stored row.
///
/// Both directions are fallible because posts and comments keep their likes
/// as a JSON document.
pub trait Persisted<E: EntityTrait>: Sized {
    fn from_model(model: E::Model) -> Result<Self, RepoError>;

    fn into_active_model(self) -> Result<E::ActiveModel, RepoError>;
}

/// Generic PostgreSQL repository implementation.
///
/// Repositories of different entities share one pool through the `Arc`.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }
}

pub(crate) fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl<E, T> BaseRepository<T, Uuid> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    T: Persisted<E> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        E::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(query_error)?
            .map(T::from_model)
            .transpose()
    }

    /// Upsert on the primary key so the same call creates and replaces.
    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let active_model = entity.into_active_model()?;

        let upsert = OnConflict::columns(E::PrimaryKey::iter().map(|key| key.into_column()))
            .update_columns(E::Column::iter())
            .to_owned();

        let model = E::insert(active_model)
            .on_conflict(upsert)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(query_error)?;

        T::from_model(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
