use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupCards::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer_null(GroupCards::CardId))
                    .col(string_len_null(GroupCards::Cardname, 255))
                    .col(string_len_null(GroupCards::GroupName, 100))
                    .col(text_null(GroupCards::Members))
                    .col(integer_null(GroupCards::ShoutValue))
                    .col(integer_null(GroupCards::BeatValue))
                    .col(integer_null(GroupCards::MelodyValue))
                    .col(integer_null(GroupCards::Attribute))
                    .col(string_len_null(GroupCards::IdolType, 50))
                    .col(string_len_null(GroupCards::GroupType, 50))
                    .col(integer_null(GroupCards::AutoScore))
                    .col(integer_null(GroupCards::SongScore))
                    .col(integer_null(GroupCards::ScoreLimit))
                    .col(string_len_null(GroupCards::BroachType, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupCards::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GroupCards {
    Table,
    Id,
    CardId,
    Cardname,
    GroupName,
    Members,
    ShoutValue,
    BeatValue,
    MelodyValue,
    Attribute,
    IdolType,
    GroupType,
    AutoScore,
    SongScore,
    ScoreLimit,
    BroachType,
}
