use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_cards::Cards;

static FK_BROACH_INFO_ID: &str = "fk-broach_info-id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BroachInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BroachInfo::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer_null(BroachInfo::BroachShout))
                    .col(integer_null(BroachInfo::BroachBeat))
                    .col(integer_null(BroachInfo::BroachMelody))
                    .col(integer_null(BroachInfo::BroachReq))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BROACH_INFO_ID)
                    .from_tbl(BroachInfo::Table)
                    .from_col(BroachInfo::Id)
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
                    .name(FK_BROACH_INFO_ID)
                    .table(BroachInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BroachInfo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BroachInfo {
    Table,
    Id,
    BroachShout,
    BroachBeat,
    BroachMelody,
    BroachReq,
}
