use sea_orm::entity::prelude::*;

/// One skill level (1..=5) of a card's appeal skill.
///
/// At most one row exists per `(card_id, skill_level)`; the migration
/// enforces this with a unique index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skill_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub card_id: i32,
    pub skill_level: i32,
    /// Trigger threshold.
    pub count: Option<i32>,
    /// Judgement type: 1 = Perfect, 2 = Great, 3 = Good.
    pub per: Option<i32>,
    pub value: Option<i32>,
    /// Activation probability in percent.
    pub rate: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card::Entity",
        from = "Column::CardId",
        to = "super::card::Column::Id"
    )]
    Card,
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
