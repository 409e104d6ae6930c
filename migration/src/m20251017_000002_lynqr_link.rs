use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_lynqr_user::LynqrUser;

static IDX_LINK_USER_ID_URL: &str = "idx-lynqr_link-user_id-url";
static FK_LINK_USER_ID: &str = "fk-lynqr_link-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LynqrLink::Table)
                    .if_not_exists()
                    .col(pk_auto(LynqrLink::Id))
                    .col(integer(LynqrLink::UserId))
                    .col(string(LynqrLink::Title))
                    .col(string(LynqrLink::Url))
                    .col(string_null(LynqrLink::Icon))
                    .col(string_null(LynqrLink::Description))
                    .col(boolean(LynqrLink::IsActive).default(true))
                    .col(timestamp(LynqrLink::CreatedAt))
                    .col(timestamp(LynqrLink::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LINK_USER_ID)
                            .from(LynqrLink::Table, LynqrLink::UserId)
                            .to(LynqrUser::Table, LynqrUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Doubles as the lookup index for a user's links
        manager
            .create_index(
                Index::create()
                    .name(IDX_LINK_USER_ID_URL)
                    .table(LynqrLink::Table)
                    .col(LynqrLink::UserId)
                    .col(LynqrLink::Url)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table drops its indexes
        manager
            .drop_table(Table::drop().table(LynqrLink::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LynqrLink {
    Table,
    Id,
    UserId,
    Title,
    Url,
    Icon,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
