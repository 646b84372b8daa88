use crate::database::SchemaRegistry;
use crate::entities::{Persisted, SoftDelete};
use crate::error::{AppError, AppResult};
use crate::repositories::Listing;
use sea_orm::sea_query::{Alias, Expr, IntoCondition, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, IdenStatic,
    IntoActiveModel, Iterable, ModelTrait, QueryFilter, QueryOrder, Related, TransactionTrait,
    Value,
};
use std::collections::HashSet;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

/// Create/read/update and relation listing for one entity type.
///
/// Writes run in a short transaction: every foreign key recorded in the
/// [`SchemaRegistry`] is checked against its parent table before the row is written.
pub struct Repository<E: Persisted> {
    db: DatabaseConnection,
    registry: Arc<SchemaRegistry>,
    entity: PhantomData<E>,
}

impl<E: Persisted> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            registry: self.registry.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: Persisted> Repository<E> {
    pub fn new(db: DatabaseConnection, registry: Arc<SchemaRegistry>) -> Self {
        Self {
            db,
            registry,
            entity: PhantomData,
        }
    }

    fn table(&self) -> String {
        E::default().table_name().to_string()
    }

    pub(crate) async fn find_in<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> AppResult<Option<E::Model>> {
        Ok(E::find().filter(E::id_column().eq(id)).one(conn).await?)
    }
}

impl<E> Repository<E>
where
    E: Persisted,
    E::Model: IntoActiveModel<E::Active> + Sync,
{
    /// Inserts `model` and returns the new id; `model`'s own id is ignored.
    pub async fn create(&self, model: E::Model) -> AppResult<i32> {
        let txn = self.db.begin().await?;
        self.check_references(&txn, &model, None).await?;

        let mut active = Self::to_active(&model);
        active.not_set(E::id_column());
        let inserted = active.insert(&txn).await?;
        txn.commit().await?;

        let id = E::id_of(&inserted);
        log::debug!("Created {} #{id}", self.table());
        Ok(id)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<E::Model> {
        Self::find_in(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} #{id} not found", self.table())))
    }

    /// Full-row update by primary key.
    pub async fn update(&self, model: E::Model) -> AppResult<()> {
        let id = E::id_of(&model);
        let txn = self.db.begin().await?;
        if Self::find_in(&txn, id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "{} #{id} not found",
                self.table()
            )));
        }
        self.check_references(&txn, &model, Some(id)).await?;

        Self::to_active(&model).update(&txn).await?;
        txn.commit().await?;

        log::debug!("Updated {} #{id}", self.table());
        Ok(())
    }

    /// Every row, ascending by id.
    pub fn list(&self) -> Listing<E> {
        Listing::new(self.db.clone(), E::find().order_by_asc(E::id_column()))
    }

    /// Rows matching `condition`, ascending by id.
    pub fn list_where<F: IntoCondition>(&self, condition: F) -> Listing<E> {
        Listing::new(
            self.db.clone(),
            E::find().filter(condition).order_by_asc(E::id_column()),
        )
    }

    /// Rows related to the parent row `P #parent_id`, through a foreign key or a
    /// join table, ascending by id.
    pub fn list_by<P>(&self, parent_id: i32) -> Listing<E>
    where
        P: Persisted,
        E: Related<P>,
    {
        let select = E::find()
            .inner_join(P::default())
            .filter(P::id_column().eq(parent_id))
            .order_by_asc(E::id_column());
        Listing::new(self.db.clone(), select)
    }

    fn to_active(model: &E::Model) -> E::Active {
        let mut active = <E::Active as ActiveModelTrait>::default();
        for column in E::Column::iter() {
            active.set(column, model.get(column));
        }
        active
    }

    async fn check_references<C: ConnectionTrait>(
        &self,
        conn: &C,
        model: &E::Model,
        own_id: Option<i32>,
    ) -> AppResult<()> {
        let table = self.registry.table_of::<E>()?;
        for fk in &table.foreign_keys {
            let column = E::Column::from_str(&fk.column).map_err(|_| {
                AppError::SchemaSyncError(format!("Unknown column {}.{}", table.name, fk.column))
            })?;
            let value = model.get(column);
            if is_null(&value) {
                continue;
            }

            if !row_exists(conn, &fk.parent_table, &fk.parent_column, value.clone()).await? {
                return Err(AppError::ConstraintError(format!(
                    "{}.{} references a missing {} row",
                    table.name, fk.column, fk.parent_table
                )));
            }

            if fk.parent_table == table.name
                && let Some(id) = own_id
            {
                Self::check_acyclic(conn, column, id, value).await?;
            }
        }
        Ok(())
    }

    /// Walks up a self-referencing key starting at `parent` and fails if the chain
    /// reaches `own_id`.
    async fn check_acyclic<C: ConnectionTrait>(
        conn: &C,
        column: E::Column,
        own_id: i32,
        parent: Value,
    ) -> AppResult<()> {
        let mut seen = HashSet::new();
        let mut next = parent;
        while let Value::Int(Some(ancestor)) = next {
            if ancestor == own_id {
                return Err(AppError::ConstraintError(format!(
                    "#{own_id} cannot become its own ancestor via {}",
                    column.as_str()
                )));
            }
            if !seen.insert(ancestor) {
                break;
            }
            next = match Self::find_in(conn, ancestor).await? {
                Some(row) => row.get(column),
                None => break,
            };
        }
        Ok(())
    }
}

impl<E> Repository<E>
where
    E: SoftDelete,
    E::Model: IntoActiveModel<E::Active> + Sync,
{
    /// Marks the row deleted. Deleting an already deleted row is a no-op.
    pub async fn soft_delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;
        if Self::find_in(&txn, id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "{} #{id} not found",
                self.table()
            )));
        }

        E::update_many()
            .col_expr(E::deleted_column(), Expr::value(true))
            .filter(E::id_column().eq(id))
            .exec(&txn)
            .await?;
        txn.commit().await?;

        log::info!("Soft-deleted {} #{id}", self.table());
        Ok(())
    }

    /// Rows not soft-deleted, ascending by id.
    pub fn list_active(&self) -> Listing<E> {
        self.list().active()
    }
}

fn is_null(value: &Value) -> bool {
    matches!(
        value,
        Value::Int(None) | Value::BigInt(None) | Value::Unsigned(None) | Value::BigUnsigned(None)
    )
}

async fn row_exists<C: ConnectionTrait>(
    conn: &C,
    table: &str,
    column: &str,
    value: Value,
) -> AppResult<bool> {
    let stmt = Query::select()
        .expr(Expr::val(1))
        .from(Alias::new(table))
        .and_where(Expr::col(Alias::new(column)).eq(value))
        .limit(1)
        .to_owned();
    let row = conn
        .query_one(conn.get_database_backend().build(&stmt))
        .await?;
    Ok(row.is_some())
}
