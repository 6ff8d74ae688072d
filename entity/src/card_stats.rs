use sea_orm::entity::prelude::*;

/// Attribute and min/max stat values of a card.
///
/// `attribute` is 1 = Shout, 2 = Beat, 3 = Melody.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "card_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub attribute: Option<i32>,
    pub shout_min: Option<i32>,
    pub shout_max: Option<i32>,
    pub beat_min: Option<i32>,
    pub beat_max: Option<i32>,
    pub melody_min: Option<i32>,
    pub melody_max: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card::Entity",
        from = "Column::Id",
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
