use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LynqrUser::Table)
                    .if_not_exists()
                    .col(pk_auto(LynqrUser::Id))
                    .col(string(LynqrUser::Name))
                    .col(string_uniq(LynqrUser::Email))
                    .col(string(LynqrUser::PasswordHash))
                    .col(string_null(LynqrUser::LinkUsername).unique_key())
                    .col(boolean(LynqrUser::HasUsername).default(false))
                    .col(string_null(LynqrUser::Image))
                    .col(text_null(LynqrUser::Bio))
                    .col(timestamp(LynqrUser::CreatedAt))
                    .col(timestamp(LynqrUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LynqrUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LynqrUser {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    LinkUsername,
    HasUsername,
    Image,
    Bio,
    CreatedAt,
    UpdatedAt,
}
