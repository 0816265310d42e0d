use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Meal {
    Table,
    MemberId,
    Date,
    MealType,
    Description,
}

#[derive(Iden, Clone)]
pub enum Event {
    Table,
    Date,
    Note,
}

#[derive(Iden, Clone)]
pub enum SiteStat {
    Table,
    Key,
    Value,
}
