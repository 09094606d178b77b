use sea_orm_migration::prelude::*;

use staffdesk_profiles_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
