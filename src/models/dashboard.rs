//! Row shapes returned by the raw aggregate queries.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date, Text};

#[derive(Debug, QueryableByName)]
pub struct SalaryRangeRow {
    #[diesel(sql_type = Text)]
    pub salary_range: String,
    #[diesel(sql_type = BigInt)]
    pub employee_count: i64,
}

#[derive(Debug, QueryableByName)]
pub struct YoungestRow {
    #[diesel(sql_type = Text)]
    pub department_name: String,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Date)]
    pub dob: NaiveDate,
}
