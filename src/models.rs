use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    pub dish_name: String,
    pub views: i32,
    pub cooking_time: i32,
    pub ingredients: String,
    pub description: String,
}

/// Insert payload. `views` is left to the column default of 0.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub dish_name: &'a str,
    pub cooking_time: i32,
    pub ingredients: &'a str,
    pub description: &'a str,
}
