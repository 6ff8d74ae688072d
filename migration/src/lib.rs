pub use sea_orm_migration::prelude::*;

mod m20251101_000001_cards;
mod m20251101_000002_card_stats;
mod m20251101_000003_card_skills;
mod m20251101_000004_skill_details;
mod m20251101_000005_release_info;
mod m20251101_000006_broach_info;
mod m20251101_000007_group_cards;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_cards::Migration),
            Box::new(m20251101_000002_card_stats::Migration),
            Box::new(m20251101_000003_card_skills::Migration),
            Box::new(m20251101_000004_skill_details::Migration),
            Box::new(m20251101_000005_release_info::Migration),
            Box::new(m20251101_000006_broach_info::Migration),
            Box::new(m20251101_000007_group_cards::Migration),
        ]
    }
}
