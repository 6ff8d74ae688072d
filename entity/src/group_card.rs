use sea_orm::entity::prelude::*;

/// A composite team card.
///
/// Not related to `cards`; rendered through the same view shape with the
/// `GROUP` rarity sentinel.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub card_id: Option<i32>,
    pub cardname: Option<String>,
    pub group_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub members: Option<String>,
    pub shout_value: Option<i32>,
    pub beat_value: Option<i32>,
    pub melody_value: Option<i32>,
    pub attribute: Option<i32>,
    pub idol_type: Option<String>,
    pub group_type: Option<String>,
    pub auto_score: Option<i32>,
    pub song_score: Option<i32>,
    pub score_limit: Option<i32>,
    pub broach_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
