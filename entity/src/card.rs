use sea_orm::entity::prelude::*;

/// An individual character/costume card.
///
/// The primary key is assigned by the import pipeline and shared by the 1:1
/// sub-tables (`card_stats`, `card_skills`, `release_info`, `broach_info`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub card_id: i32,
    pub cardname: String,
    pub name: String,
    pub name_other: Option<String>,
    pub groupname: Option<String>,
    pub rarity: String,
    pub get_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub story: Option<String>,
    pub awakening_item: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::card_stats::Entity")]
    CardStats,
    #[sea_orm(has_one = "super::card_skills::Entity")]
    CardSkills,
    #[sea_orm(has_one = "super::release_info::Entity")]
    ReleaseInfo,
    #[sea_orm(has_one = "super::broach_info::Entity")]
    BroachInfo,
    #[sea_orm(has_many = "super::skill_detail::Entity")]
    SkillDetail,
}

impl Related<super::card_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardStats.def()
    }
}

impl Related<super::card_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardSkills.def()
    }
}

impl Related<super::release_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReleaseInfo.def()
    }
}

impl Related<super::broach_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BroachInfo.def()
    }
}

impl Related<super::skill_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
