//! Card database insertion utilities.
//!
//! Sub-records reference `cards.id` through foreign keys, so the parent card must be
//! inserted first. [`CardFixtures::insert_full_mock_card`] takes care of the ordering.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::card::{factory, CardFixtures},
    model::{
        BroachInfoModel, CardModel, CardSkillsModel, CardStatsModel, GroupCardModel,
        ReleaseInfoModel, SkillDetailModel,
    },
};

impl<'a> CardFixtures<'a> {
    /// Insert a card row.
    ///
    /// # Returns
    /// - `Ok(CardModel)` - The inserted card
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. duplicate id
    pub async fn insert_card(&self, card: CardModel) -> Result<CardModel, TestError> {
        Ok(entity::prelude::Card::insert(entity::card::ActiveModel {
            id: ActiveValue::Set(card.id),
            card_id: ActiveValue::Set(card.card_id),
            cardname: ActiveValue::Set(card.cardname),
            name: ActiveValue::Set(card.name),
            name_other: ActiveValue::Set(card.name_other),
            groupname: ActiveValue::Set(card.groupname),
            rarity: ActiveValue::Set(card.rarity),
            get_type: ActiveValue::Set(card.get_type),
            story: ActiveValue::Set(card.story),
            awakening_item: ActiveValue::Set(card.awakening_item),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert [`factory::mock_card`] without any sub-records.
    pub async fn insert_mock_card(&self, id: i32) -> Result<CardModel, TestError> {
        self.insert_card(factory::mock_card(id)).await
    }

    pub async fn insert_card_stats(
        &self,
        stats: CardStatsModel,
    ) -> Result<CardStatsModel, TestError> {
        Ok(
            entity::prelude::CardStats::insert(entity::card_stats::ActiveModel {
                id: ActiveValue::Set(stats.id),
                attribute: ActiveValue::Set(stats.attribute),
                shout_min: ActiveValue::Set(stats.shout_min),
                shout_max: ActiveValue::Set(stats.shout_max),
                beat_min: ActiveValue::Set(stats.beat_min),
                beat_max: ActiveValue::Set(stats.beat_max),
                melody_min: ActiveValue::Set(stats.melody_min),
                melody_max: ActiveValue::Set(stats.melody_max),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_card_skills(
        &self,
        skills: CardSkillsModel,
    ) -> Result<CardSkillsModel, TestError> {
        Ok(
            entity::prelude::CardSkills::insert(entity::card_skills::ActiveModel {
                id: ActiveValue::Set(skills.id),
                ap_skill_type: ActiveValue::Set(skills.ap_skill_type),
                ap_skill_req: ActiveValue::Set(skills.ap_skill_req),
                ap_skill_name: ActiveValue::Set(skills.ap_skill_name),
                ct_skill: ActiveValue::Set(skills.ct_skill),
                comment: ActiveValue::Set(skills.comment),
                sp_time: ActiveValue::Set(skills.sp_time),
                sp_value: ActiveValue::Set(skills.sp_value),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a skill level row. The model's `id` is ignored and assigned by the database.
    pub async fn insert_skill_detail(
        &self,
        detail: SkillDetailModel,
    ) -> Result<SkillDetailModel, TestError> {
        Ok(
            entity::prelude::SkillDetail::insert(entity::skill_detail::ActiveModel {
                card_id: ActiveValue::Set(detail.card_id),
                skill_level: ActiveValue::Set(detail.skill_level),
                count: ActiveValue::Set(detail.count),
                per: ActiveValue::Set(detail.per),
                value: ActiveValue::Set(detail.value),
                rate: ActiveValue::Set(detail.rate),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_release_info(
        &self,
        release: ReleaseInfoModel,
    ) -> Result<ReleaseInfoModel, TestError> {
        Ok(
            entity::prelude::ReleaseInfo::insert(entity::release_info::ActiveModel {
                id: ActiveValue::Set(release.id),
                year: ActiveValue::Set(release.year),
                month: ActiveValue::Set(release.month),
                day: ActiveValue::Set(release.day),
                event: ActiveValue::Set(release.event),
                createtime: ActiveValue::Set(release.createtime),
                updatetime: ActiveValue::Set(release.updatetime),
                listview: ActiveValue::Set(release.listview),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_broach_info(
        &self,
        broach: BroachInfoModel,
    ) -> Result<BroachInfoModel, TestError> {
        Ok(
            entity::prelude::BroachInfo::insert(entity::broach_info::ActiveModel {
                id: ActiveValue::Set(broach.id),
                broach_shout: ActiveValue::Set(broach.broach_shout),
                broach_beat: ActiveValue::Set(broach.broach_beat),
                broach_melody: ActiveValue::Set(broach.broach_melody),
                broach_req: ActiveValue::Set(broach.broach_req),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_group_card(
        &self,
        group_card: GroupCardModel,
    ) -> Result<GroupCardModel, TestError> {
        Ok(
            entity::prelude::GroupCard::insert(entity::group_card::ActiveModel {
                id: ActiveValue::Set(group_card.id),
                card_id: ActiveValue::Set(group_card.card_id),
                cardname: ActiveValue::Set(group_card.cardname),
                group_name: ActiveValue::Set(group_card.group_name),
                members: ActiveValue::Set(group_card.members),
                shout_value: ActiveValue::Set(group_card.shout_value),
                beat_value: ActiveValue::Set(group_card.beat_value),
                melody_value: ActiveValue::Set(group_card.melody_value),
                attribute: ActiveValue::Set(group_card.attribute),
                idol_type: ActiveValue::Set(group_card.idol_type),
                group_type: ActiveValue::Set(group_card.group_type),
                auto_score: ActiveValue::Set(group_card.auto_score),
                song_score: ActiveValue::Set(group_card.song_score),
                score_limit: ActiveValue::Set(group_card.score_limit),
                broach_type: ActiveValue::Set(group_card.broach_type),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_group_card(&self, id: i32) -> Result<GroupCardModel, TestError> {
        self.insert_group_card(factory::mock_group_card(id)).await
    }

    /// Insert a mock card together with every sub-record.
    ///
    /// Stats use the Shout attribute, skills use [`factory::MOCK_SKILL_TYPE`], release info
    /// is year 2020 without an event, and skill levels 1 through 5 are inserted.
    ///
    /// # Returns
    /// - `Ok(CardModel)` - The inserted card
    /// - `Err(TestError::DbErr)` - Any insert failed
    pub async fn insert_full_mock_card(&self, id: i32) -> Result<CardModel, TestError> {
        let card = self.insert_mock_card(id).await?;

        self.insert_card_stats(factory::mock_card_stats(id, 1))
            .await?;
        self.insert_card_skills(factory::mock_card_skills(id, factory::MOCK_SKILL_TYPE))
            .await?;
        self.insert_release_info(factory::mock_release_info(id, Some(2020), None))
            .await?;
        self.insert_broach_info(factory::mock_broach_info(id))
            .await?;
        for level in 1..=5 {
            self.insert_skill_detail(factory::mock_skill_detail(id, level))
                .await?;
        }

        Ok(card)
    }
}
