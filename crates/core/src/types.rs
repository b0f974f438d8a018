/// Movie primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`.
pub type DbId = i64;
