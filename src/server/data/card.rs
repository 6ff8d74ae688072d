use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::{
    data::contains_ci,
    model::{card::CardView, db::SkillDetailModel},
};

/// A card joined with its optional stats, skills, release and broach records.
///
/// Column names of the sub-records are unique across the join, so each maps directly
/// onto a field here. Every sub-record field is `None` when the row is missing.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct CardRow {
    pub id: i32,
    pub card_id: i32,
    pub cardname: String,
    pub name: String,
    pub name_other: Option<String>,
    pub groupname: Option<String>,
    pub rarity: String,
    pub get_type: Option<String>,
    pub story: Option<String>,
    pub awakening_item: Option<i32>,

    pub attribute: Option<i32>,
    pub shout_min: Option<i32>,
    pub shout_max: Option<i32>,
    pub beat_min: Option<i32>,
    pub beat_max: Option<i32>,
    pub melody_min: Option<i32>,
    pub melody_max: Option<i32>,

    pub ap_skill_type: Option<String>,
    pub ap_skill_req: Option<i32>,
    pub ap_skill_name: Option<String>,
    pub ct_skill: Option<i32>,
    pub comment: Option<String>,
    pub sp_time: Option<i32>,
    pub sp_value: Option<i32>,

    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub event: Option<String>,
    pub createtime: Option<NaiveDateTime>,
    pub updatetime: Option<NaiveDateTime>,

    pub broach_shout: Option<i32>,
    pub broach_beat: Option<i32>,
    pub broach_melody: Option<i32>,
    pub broach_req: Option<i32>,
}

impl From<CardRow> for CardView {
    fn from(row: CardRow) -> Self {
        Self {
            id: row.id,
            card_id: Some(row.card_id),
            cardname: row.cardname,
            name: row.name,
            name_other: row.name_other,
            groupname: row.groupname,
            rarity: row.rarity,
            get_type: row.get_type,
            story: row.story,
            awakening_item: row.awakening_item,
            is_group_card: false,
            attribute: row.attribute,
            shout_min: row.shout_min,
            shout_max: row.shout_max,
            beat_min: row.beat_min,
            beat_max: row.beat_max,
            melody_min: row.melody_min,
            melody_max: row.melody_max,
            ap_skill_type: row.ap_skill_type,
            ap_skill_req: row.ap_skill_req,
            ap_skill_name: row.ap_skill_name,
            ct_skill: row.ct_skill,
            comment: row.comment,
            sp_time: row.sp_time,
            sp_value: row.sp_value,
            year: row.year,
            month: row.month,
            day: row.day,
            event: row.event,
            createtime: row.createtime,
            updatetime: row.updatetime,
            broach_shout: row.broach_shout,
            broach_beat: row.broach_beat,
            broach_melody: row.broach_melody,
            broach_req: row.broach_req,
            broach_type: None,
            skill_details: Vec::new(),
        }
    }
}

pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cards left-joined with every 1:1 sub-record, selecting the columns of [`CardRow`].
    pub(crate) fn joined_select() -> Select<entity::card::Entity> {
        entity::prelude::Card::find()
            .join(JoinType::LeftJoin, entity::card::Relation::CardStats.def())
            .join(JoinType::LeftJoin, entity::card::Relation::CardSkills.def())
            .join(JoinType::LeftJoin, entity::card::Relation::ReleaseInfo.def())
            .join(JoinType::LeftJoin, entity::card::Relation::BroachInfo.def())
            .column(entity::card_stats::Column::Attribute)
            .column(entity::card_stats::Column::ShoutMin)
            .column(entity::card_stats::Column::ShoutMax)
            .column(entity::card_stats::Column::BeatMin)
            .column(entity::card_stats::Column::BeatMax)
            .column(entity::card_stats::Column::MelodyMin)
            .column(entity::card_stats::Column::MelodyMax)
            .column(entity::card_skills::Column::ApSkillType)
            .column(entity::card_skills::Column::ApSkillReq)
            .column(entity::card_skills::Column::ApSkillName)
            .column(entity::card_skills::Column::CtSkill)
            .column(entity::card_skills::Column::Comment)
            .column(entity::card_skills::Column::SpTime)
            .column(entity::card_skills::Column::SpValue)
            .column(entity::release_info::Column::Year)
            .column(entity::release_info::Column::Month)
            .column(entity::release_info::Column::Day)
            .column(entity::release_info::Column::Event)
            .column(entity::release_info::Column::Createtime)
            .column(entity::release_info::Column::Updatetime)
            .column(entity::broach_info::Column::BroachShout)
            .column(entity::broach_info::Column::BroachBeat)
            .column(entity::broach_info::Column::BroachMelody)
            .column(entity::broach_info::Column::BroachReq)
    }

    /// Fetch a window of cards, newest id first.
    pub async fn get_page(&self, limit: u64, offset: u64) -> Result<Vec<CardRow>, DbErr> {
        Self::joined_select()
            .order_by_desc(entity::card::Column::Id)
            .limit(limit)
            .offset(offset)
            .into_model::<CardRow>()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CardRow>, DbErr> {
        Self::joined_select()
            .filter(entity::card::Column::Id.eq(id))
            .into_model::<CardRow>()
            .one(self.db)
            .await
    }

    /// All skill levels of a card in ascending level order.
    pub async fn get_skill_details(&self, card_id: i32) -> Result<Vec<SkillDetailModel>, DbErr> {
        entity::prelude::SkillDetail::find()
            .filter(entity::skill_detail::Column::CardId.eq(card_id))
            .order_by_asc(entity::skill_detail::Column::SkillLevel)
            .all(self.db)
            .await
    }

    /// Case-insensitive substring search over cardname, character name and group name.
    pub async fn search(&self, query: &str, limit: u64) -> Result<Vec<CardRow>, DbErr> {
        Self::joined_select()
            .filter(
                Condition::any()
                    .add(contains_ci(entity::card::Column::Cardname, query))
                    .add(contains_ci(entity::card::Column::Name, query))
                    .add(contains_ci(entity::card::Column::Groupname, query)),
            )
            .order_by_desc(entity::card::Column::Id)
            .limit(limit)
            .into_model::<CardRow>()
            .all(self.db)
            .await
    }

    pub async fn get_by_rarity(&self, rarity: &str) -> Result<Vec<CardRow>, DbErr> {
        self.get_filtered(Condition::all().add(entity::card::Column::Rarity.eq(rarity)))
            .await
    }

    pub async fn get_by_character(&self, name: &str) -> Result<Vec<CardRow>, DbErr> {
        self.get_filtered(Condition::all().add(entity::card::Column::Name.eq(name)))
            .await
    }

    pub async fn get_by_attribute(&self, attribute: i32) -> Result<Vec<CardRow>, DbErr> {
        self.get_filtered(
            Condition::all().add(entity::card_stats::Column::Attribute.eq(attribute)),
        )
        .await
    }

    async fn get_filtered(&self, condition: Condition) -> Result<Vec<CardRow>, DbErr> {
        Self::joined_select()
            .filter(condition)
            .order_by_desc(entity::card::Column::Id)
            .into_model::<CardRow>()
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Card::find().count(self.db).await
    }

    /// `(rarity, count)` for every rarity present, in no particular order.
    pub async fn rarity_counts(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Card::find()
            .select_only()
            .column(entity::card::Column::Rarity)
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::card::Column::Id))),
                "count",
            )
            .group_by(entity::card::Column::Rarity)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// `(name, count)` for the given character names that have at least one card.
    pub async fn character_counts(&self, names: &[&str]) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Card::find()
            .select_only()
            .column(entity::card::Column::Name)
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::card::Column::Id))),
                "count",
            )
            .filter(entity::card::Column::Name.is_in(names.iter().copied()))
            .group_by(entity::card::Column::Name)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Distinct non-null release years, newest first.
    pub async fn distinct_years(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ReleaseInfo::find()
            .select_only()
            .column(entity::release_info::Column::Year)
            .filter(entity::release_info::Column::Year.is_not_null())
            .distinct()
            .order_by_desc(entity::release_info::Column::Year)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Distinct non-null skill types in ascending order.
    pub async fn distinct_skill_types(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::CardSkills::find()
            .select_only()
            .column(entity::card_skills::Column::ApSkillType)
            .filter(entity::card_skills::Column::ApSkillType.is_not_null())
            .distinct()
            .order_by_asc(entity::card_skills::Column::ApSkillType)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
