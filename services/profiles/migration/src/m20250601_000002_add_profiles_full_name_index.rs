use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The listing always reads the whole table ordered by full_name.
        manager
            .create_index(
                Index::create()
                    .table(Profiles::Table)
                    .col(Profiles::FullName)
                    .name("idx_profiles_full_name")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_profiles_full_name").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    FullName,
}
