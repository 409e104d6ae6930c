use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000002_lynqr_link::LynqrLink;

static IDX_CLICK_LINK_ID: &str = "idx-lynqr_click-link_id";
static FK_CLICK_LINK_ID: &str = "fk-lynqr_click-link_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LynqrClick::Table)
                    .if_not_exists()
                    .col(pk_auto(LynqrClick::Id))
                    .col(integer(LynqrClick::LinkId))
                    .col(timestamp(LynqrClick::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CLICK_LINK_ID)
                            .from(LynqrClick::Table, LynqrClick::LinkId)
                            .to(LynqrLink::Table, LynqrLink::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CLICK_LINK_ID)
                    .table(LynqrClick::Table)
                    .col(LynqrClick::LinkId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CLICK_LINK_ID)
                    .table(LynqrClick::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LynqrClick::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LynqrClick {
    Table,
    Id,
    LinkId,
    CreatedAt,
}
