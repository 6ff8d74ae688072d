use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_cards::Cards;

static IDX_CARD_SKILLS_AP_SKILL_TYPE: &str = "idx-card_skills-ap_skill_type";
static FK_CARD_SKILLS_ID: &str = "fk-card_skills-id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CardSkills::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_len_null(CardSkills::ApSkillType, 100))
                    .col(integer_null(CardSkills::ApSkillReq))
                    .col(string_len_null(CardSkills::ApSkillName, 255))
                    .col(integer_null(CardSkills::CtSkill))
                    .col(text_null(CardSkills::Comment))
                    .col(integer_null(CardSkills::SpTime))
                    .col(integer_null(CardSkills::SpValue))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CARD_SKILLS_AP_SKILL_TYPE)
                    .table(CardSkills::Table)
                    .col(CardSkills::ApSkillType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CARD_SKILLS_ID)
                    .from_tbl(CardSkills::Table)
                    .from_col(CardSkills::Id)
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
                    .name(FK_CARD_SKILLS_ID)
                    .table(CardSkills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CARD_SKILLS_AP_SKILL_TYPE)
                    .table(CardSkills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CardSkills::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CardSkills {
    Table,
    Id,
    ApSkillType,
    ApSkillReq,
    ApSkillName,
    CtSkill,
    Comment,
    SpTime,
    SpValue,
}
