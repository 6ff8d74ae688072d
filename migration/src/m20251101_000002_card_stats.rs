use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_cards::Cards;

static IDX_CARD_STATS_ATTRIBUTE: &str = "idx-card_stats-attribute";
static FK_CARD_STATS_ID: &str = "fk-card_stats-id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CardStats::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer_null(CardStats::Attribute))
                    .col(integer_null(CardStats::ShoutMin))
                    .col(integer_null(CardStats::ShoutMax))
                    .col(integer_null(CardStats::BeatMin))
                    .col(integer_null(CardStats::BeatMax))
                    .col(integer_null(CardStats::MelodyMin))
                    .col(integer_null(CardStats::MelodyMax))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CARD_STATS_ATTRIBUTE)
                    .table(CardStats::Table)
                    .col(CardStats::Attribute)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CARD_STATS_ID)
                    .from_tbl(CardStats::Table)
                    .from_col(CardStats::Id)
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
                    .name(FK_CARD_STATS_ID)
                    .table(CardStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CARD_STATS_ATTRIBUTE)
                    .table(CardStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CardStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CardStats {
    Table,
    Id,
    Attribute,
    ShoutMin,
    ShoutMax,
    BeatMin,
    BeatMax,
    MelodyMin,
    MelodyMax,
}
