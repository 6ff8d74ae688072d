use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_cards::Cards;

static IDX_RELEASE_INFO_YEAR: &str = "idx-release_info-year";
static FK_RELEASE_INFO_ID: &str = "fk-release_info-id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReleaseInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReleaseInfo::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer_null(ReleaseInfo::Year))
                    .col(integer_null(ReleaseInfo::Month))
                    .col(integer_null(ReleaseInfo::Day))
                    .col(string_len_null(ReleaseInfo::Event, 255))
                    .col(timestamp_null(ReleaseInfo::Createtime))
                    .col(timestamp_null(ReleaseInfo::Updatetime))
                    .col(integer_null(ReleaseInfo::Listview).default(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RELEASE_INFO_YEAR)
                    .table(ReleaseInfo::Table)
                    .col(ReleaseInfo::Year)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RELEASE_INFO_ID)
                    .from_tbl(ReleaseInfo::Table)
                    .from_col(ReleaseInfo::Id)
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
                    .name(FK_RELEASE_INFO_ID)
                    .table(ReleaseInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RELEASE_INFO_YEAR)
                    .table(ReleaseInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReleaseInfo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ReleaseInfo {
    Table,
    Id,
    Year,
    Month,
    Day,
    Event,
    Createtime,
    Updatetime,
    Listview,
}
