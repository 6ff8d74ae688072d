use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    data::contains_ci,
    model::{db::GroupCardModel, search::GroupCardSearchParams},
};

pub struct GroupCardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupCardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The `limit` most recent group cards, newest id first, always from offset 0.
    pub async fn get_latest(&self, limit: u64) -> Result<Vec<GroupCardModel>, DbErr> {
        entity::prelude::GroupCard::find()
            .order_by_desc(entity::group_card::Column::Id)
            .limit(limit)
            .offset(0)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::GroupCard::find().count(self.db).await
    }

    /// Group cards matching every provided criterion, newest id first.
    pub async fn search(
        &self,
        params: &GroupCardSearchParams,
    ) -> Result<Vec<GroupCardModel>, DbErr> {
        let mut condition = Condition::all();

        if let Some(name) = params.name.as_deref().filter(|n| !n.is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(contains_ci(entity::group_card::Column::GroupName, name))
                    .add(contains_ci(entity::group_card::Column::Cardname, name))
                    .add(contains_ci(entity::group_card::Column::Members, name)),
            );
        }

        if let Some(member) = params.member.as_deref().filter(|m| !m.is_empty()) {
            condition = condition.add(contains_ci(entity::group_card::Column::Members, member));
        }

        if let Some(attribute) = params.attribute {
            condition = condition.add(entity::group_card::Column::Attribute.eq(attribute));
        }

        entity::prelude::GroupCard::find()
            .filter(condition)
            .order_by_desc(entity::group_card::Column::Id)
            .all(self.db)
            .await
    }
}
