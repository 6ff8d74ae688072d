use sea_orm_migration::{prelude::*, schema::*};

static IDX_CARDS_NAME: &str = "idx-cards-name";
static IDX_CARDS_RARITY: &str = "idx-cards-rarity";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cards::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer(Cards::CardId))
                    .col(string_len(Cards::Cardname, 255))
                    .col(string_len(Cards::Name, 100))
                    .col(string_len_null(Cards::NameOther, 100))
                    .col(string_len_null(Cards::Groupname, 100))
                    .col(string_len(Cards::Rarity, 10))
                    .col(string_len_null(Cards::GetType, 50))
                    .col(text_null(Cards::Story))
                    .col(integer_null(Cards::AwakeningItem).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CARDS_NAME)
                    .table(Cards::Table)
                    .col(Cards::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CARDS_RARITY)
                    .table(Cards::Table)
                    .col(Cards::Rarity)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CARDS_RARITY)
                    .table(Cards::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CARDS_NAME)
                    .table(Cards::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Cards {
    Table,
    Id,
    CardId,
    Cardname,
    Name,
    NameOther,
    Groupname,
    Rarity,
    GetType,
    Story,
    AwakeningItem,
}
