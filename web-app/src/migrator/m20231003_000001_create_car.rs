use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20231003_000001_create_car"
    }
}

#[rustfmt::skip]
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Car::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Car::Name).string().not_null())
                    .col(ColumnDef::new(Car::Price).big_integer().not_null())
                    .col(ColumnDef::new(Car::Size).integer().not_null())
                    .col(ColumnDef::new(Car::Image).string().not_null())
                    .col(ColumnDef::new(Car::IsCurrentlyRented).boolean().not_null().default(false))
                    .col(ColumnDef::new(Car::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Car::UpdatedAt).date_time().not_null())
                    .clone(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).clone())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Name,
    Price,
    Size,
    Image,
    IsCurrentlyRented,
    CreatedAt,
    UpdatedAt,
}
