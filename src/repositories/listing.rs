use crate::entities::SoftDelete;
use crate::error::AppResult;
use crate::models::{PaginatedResponse, PaginationParams};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Paginator, PaginatorTrait, QueryFilter,
    QuerySelect, Select, SelectModel,
};

/// 延迟执行的查询结果集
///
/// 构造时不访问数据库；每次调用 `all`/`count`/`page`/`pages` 都从头重新执行。
#[derive(Clone, Debug)]
pub struct Listing<E: EntityTrait> {
    db: DatabaseConnection,
    select: Select<E>,
}

impl<E> Listing<E>
where
    E: EntityTrait,
    E::Model: Sync,
{
    pub(crate) fn new(db: DatabaseConnection, select: Select<E>) -> Self {
        Self { db, select }
    }

    pub async fn all(&self) -> AppResult<Vec<E::Model>> {
        Ok(self.select.clone().all(&self.db).await?)
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.select.clone().count(&self.db).await?)
    }

    /// One page, 1-based, with the total row count.
    pub async fn page(&self, params: &PaginationParams) -> AppResult<PaginatedResponse<E::Model>> {
        let total = self.count().await? as i64;
        let data = self
            .select
            .clone()
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.db)
            .await?;

        Ok(PaginatedResponse::new(
            data,
            params.get_page(),
            params.get_limit(),
            total,
        ))
    }

    /// 按页迭代；`fetch_page` 的页码从 0 开始
    pub fn pages(&self, page_size: u64) -> Paginator<'_, DatabaseConnection, SelectModel<E::Model>> {
        self.select.clone().paginate(&self.db, page_size.max(1))
    }
}

impl<E> Listing<E>
where
    E: SoftDelete,
    E::Model: Sync,
{
    /// 过滤掉已软删除的行
    pub fn active(self) -> Self {
        Self {
            db: self.db,
            select: self.select.filter(E::deleted_column().eq(false)),
        }
    }
}
