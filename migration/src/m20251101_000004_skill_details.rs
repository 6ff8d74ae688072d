use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_cards::Cards;

static IDX_SKILL_DETAILS_CARD_ID_SKILL_LEVEL: &str = "idx-skill_details-card_id-skill_level";
static FK_SKILL_DETAILS_CARD_ID: &str = "fk-skill_details-card_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SkillDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(SkillDetails::Id))
                    .col(integer(SkillDetails::CardId))
                    .col(integer(SkillDetails::SkillLevel))
                    .col(integer_null(SkillDetails::Count))
                    .col(integer_null(SkillDetails::Per))
                    .col(integer_null(SkillDetails::Value))
                    .col(integer_null(SkillDetails::Rate))
                    .to_owned(),
            )
            .await?;

        // One row per skill level of a card
        manager
            .create_index(
                Index::create()
                    .name(IDX_SKILL_DETAILS_CARD_ID_SKILL_LEVEL)
                    .table(SkillDetails::Table)
                    .col(SkillDetails::CardId)
                    .col(SkillDetails::SkillLevel)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SKILL_DETAILS_CARD_ID)
                    .from_tbl(SkillDetails::Table)
                    .from_col(SkillDetails::CardId)
                    .to_tbl(Cards::Table)
                    .to_col(Cards::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SKILL_DETAILS_CARD_ID)
                    .table(SkillDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SKILL_DETAILS_CARD_ID_SKILL_LEVEL)
                    .table(SkillDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SkillDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SkillDetails {
    Table,
    Id,
    CardId,
    SkillLevel,
    Count,
    Per,
    Value,
    Rate,
}
