use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Event;

pub struct CreateTable;

// One note per date. An empty note is a stored value, not a deletion.
fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Event::Table)
        .col(
            ColumnDef::new(Event::Date)
                .string()
                .not_null()
                .string_len(10)
                .primary_key(),
        )
        .col(ColumnDef::new(Event::Note).string().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Event::Table).to_owned()
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
