//! Aggregate queries backing the analytics dashboard.

use diesel::dsl::max;
use diesel::prelude::*;

use crate::{
    domain::dashboard::{DepartmentSalary, SALARY_BRACKETS, SalaryBracket, SalaryRangeCount},
    models::dashboard::{SalaryRangeRow, YoungestRow},
    repository::{
        DashboardReader, DepartmentBirthday, DieselRepository, errors::RepositoryResult,
    },
};

const YOUNGEST_BY_DEPARTMENT_SQL: &str = "\
    SELECT d.name AS department_name, e.name AS name, e.dob AS dob \
    FROM employees e \
    INNER JOIN departments d ON d.id = e.department_id \
    WHERE e.dob = (SELECT MAX(inner_e.dob) FROM employees inner_e \
                   WHERE inner_e.department_id = e.department_id) \
    ORDER BY d.name ASC, e.name ASC";

fn bracket_condition(bracket: &SalaryBracket) -> String {
    match (bracket.above, bracket.up_to) {
        (Some(above), Some(up_to)) => format!("salary > {above} AND salary <= {up_to}"),
        (None, Some(up_to)) => format!("salary <= {up_to}"),
        (Some(above), None) => format!("salary > {above}"),
        (None, None) => "1 = 1".to_string(),
    }
}

/// Builds the grouping query from [`SALARY_BRACKETS`] so the SQL and the
/// in-memory bracket definitions cannot drift apart.
fn salary_range_sql() -> String {
    let arms = SALARY_BRACKETS
        .iter()
        .map(|bracket| {
            format!(
                "WHEN {} THEN '{}'",
                bracket_condition(bracket),
                bracket.label
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "SELECT CASE {arms} END AS salary_range, COUNT(*) AS employee_count \
         FROM employees GROUP BY salary_range"
    )
}

impl DashboardReader for DieselRepository {
    fn department_highest_salaries(&self) -> RepositoryResult<Vec<DepartmentSalary>> {
        use crate::schema::{departments, employees};

        let mut conn = self.conn()?;
        let rows = departments::table
            .inner_join(employees::table)
            .group_by(departments::name)
            .select((departments::name, max(employees::salary)))
            .order(departments::name.asc())
            .load::<(String, Option<f64>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .filter_map(|(department_name, highest_salary)| {
                highest_salary.map(|highest_salary| DepartmentSalary {
                    department_name,
                    highest_salary,
                })
            })
            .collect())
    }

    fn salary_range_counts(&self) -> RepositoryResult<Vec<SalaryRangeCount>> {
        let mut conn = self.conn()?;
        let rows = diesel::sql_query(salary_range_sql()).load::<SalaryRangeRow>(&mut conn)?;

        Ok(SALARY_BRACKETS
            .iter()
            .map(|bracket| SalaryRangeCount {
                salary_range: bracket.label.to_string(),
                employee_count: rows
                    .iter()
                    .find(|row| row.salary_range == bracket.label)
                    .map_or(0, |row| row.employee_count),
            })
            .collect())
    }

    fn youngest_by_department(&self) -> RepositoryResult<Vec<DepartmentBirthday>> {
        let mut conn = self.conn()?;
        let rows = diesel::sql_query(YOUNGEST_BY_DEPARTMENT_SQL).load::<YoungestRow>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|row| DepartmentBirthday {
                department_name: row.department_name,
                name: row.name,
                dob: row.dob,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_range_sql_covers_every_bracket() {
        let sql = salary_range_sql();

        for bracket in &SALARY_BRACKETS {
            assert!(sql.contains(&format!("'{}'", bracket.label)));
        }
        assert!(sql.contains("WHEN salary <= 50000 THEN '0 - 50000'"));
        assert!(sql.contains("WHEN salary > 150000 THEN '150001+'"));
    }
}
