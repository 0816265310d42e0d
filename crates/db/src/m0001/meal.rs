use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::Meal;

pub struct CreateTable;

// Identity is the (member_id, date, meal_type) triple; repeated saves for the
// same slot overwrite instead of duplicating.
fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Meal::Table)
        .col(ColumnDef::new(Meal::MemberId).string().not_null())
        .col(
            ColumnDef::new(Meal::Date)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Meal::MealType)
                .string()
                .not_null()
                .string_len(16),
        )
        .col(ColumnDef::new(Meal::Description).string().not_null())
        .primary_key(
            Index::create()
                .col(Meal::MemberId)
                .col(Meal::Date)
                .col(Meal::MealType),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Meal::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
