use crate::entities::Junction;
use crate::error::{AppError, AppResult};
use crate::repositories::Repository;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityName, IntoActiveModel, PaginatorTrait,
    QueryFilter, TransactionTrait,
};
use std::marker::PhantomData;

/// 多对多关系表的操作句柄
///
/// `left` 与 `right` 分别是 [`Junction::Left`] 和 [`Junction::Right`] 的 id。
pub struct Association<J: Junction> {
    db: DatabaseConnection,
    junction: PhantomData<J>,
}

impl<J: Junction> Clone for Association<J> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            junction: PhantomData,
        }
    }
}

impl<J> Association<J>
where
    J: Junction,
    J::Model: IntoActiveModel<J::Active> + Sync,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            junction: PhantomData,
        }
    }

    /// 建立关联；已存在时不做任何事
    pub async fn attach(&self, left: i32, right: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;
        if Repository::<J::Left>::find_in(&txn, left).await?.is_none() {
            return Err(self.missing(J::Left::default().table_name(), left));
        }
        if Repository::<J::Right>::find_in(&txn, right).await?.is_none() {
            return Err(self.missing(J::Right::default().table_name(), right));
        }

        let existing = J::find()
            .filter(J::left_column().eq(left))
            .filter(J::right_column().eq(right))
            .count(&txn)
            .await?;
        if existing == 0 {
            let mut active = <J::Active as ActiveModelTrait>::default();
            active.set(J::left_column(), left.into());
            active.set(J::right_column(), right.into());
            J::insert(active).exec_without_returning(&txn).await?;
            log::debug!(
                "Attached {}({left}, {right})",
                J::default().table_name()
            );
        }
        txn.commit().await?;
        Ok(())
    }

    /// 解除关联；不存在时不报错
    pub async fn detach(&self, left: i32, right: i32) -> AppResult<()> {
        let result = J::delete_many()
            .filter(J::left_column().eq(left))
            .filter(J::right_column().eq(right))
            .exec(&self.db)
            .await?;
        if result.rows_affected > 0 {
            log::debug!(
                "Detached {}({left}, {right})",
                J::default().table_name()
            );
        }
        Ok(())
    }

    pub async fn is_attached(&self, left: i32, right: i32) -> AppResult<bool> {
        let count = J::find()
            .filter(J::left_column().eq(left))
            .filter(J::right_column().eq(right))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    fn missing(&self, table: &str, id: i32) -> AppError {
        AppError::ConstraintError(format!(
            "{} cannot reference missing {table} #{id}",
            J::default().table_name()
        ))
    }
}
