//! Services computing the analytics dashboard aggregates.

use chrono::NaiveDate;

use crate::domain::dashboard::{DepartmentSalary, SalaryRangeCount, YoungestEmployee};
use crate::domain::types::age_on;
use crate::dto::dashboard::DashboardPageData;
use crate::repository::DashboardReader;
use crate::services::ServiceResult;

pub fn department_highest_salaries<R>(repo: &R) -> ServiceResult<Vec<DepartmentSalary>>
where
    R: DashboardReader + ?Sized,
{
    Ok(repo.department_highest_salaries()?)
}

/// Every salary bracket in ascending order, including empty ones.
pub fn salary_range_counts<R>(repo: &R) -> ServiceResult<Vec<SalaryRangeCount>>
where
    R: DashboardReader + ?Sized,
{
    Ok(repo.salary_range_counts()?)
}

/// Youngest employee(s) of each department with their age on `today`.
pub fn youngest_by_department<R>(repo: &R, today: NaiveDate) -> ServiceResult<Vec<YoungestEmployee>>
where
    R: DashboardReader + ?Sized,
{
    Ok(repo
        .youngest_by_department()?
        .into_iter()
        .map(|row| YoungestEmployee {
            department_name: row.department_name,
            name: row.name,
            age: age_on(row.dob, today),
        })
        .collect())
}

pub fn load_dashboard<R>(repo: &R, today: NaiveDate) -> ServiceResult<DashboardPageData>
where
    R: DashboardReader + ?Sized,
{
    Ok(DashboardPageData {
        highest_salaries: department_highest_salaries(repo)?,
        salary_ranges: salary_range_counts(repo)?,
        youngest: youngest_by_department(repo, today)?,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::dashboard::SALARY_BRACKETS;
    use crate::repository::DepartmentBirthday;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn birthdays() -> Vec<DepartmentBirthday> {
        vec![
            DepartmentBirthday {
                department_name: "Engineering".to_string(),
                name: "Grace".to_string(),
                dob: NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(),
            },
            DepartmentBirthday {
                department_name: "Sales".to_string(),
                name: "Linus".to_string(),
                dob: NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            },
        ]
    }

    fn empty_brackets() -> Vec<SalaryRangeCount> {
        SALARY_BRACKETS
            .iter()
            .map(|bracket| SalaryRangeCount {
                salary_range: bracket.label.to_string(),
                employee_count: 0,
            })
            .collect()
    }

    #[test]
    fn youngest_ages_are_relative_to_today() {
        let mut repo = MockRepository::new();
        repo.expect_youngest_by_department()
            .times(1)
            .returning(|| Ok(birthdays()));
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

        let youngest = youngest_by_department(&repo, today).expect("should load");

        assert_eq!(
            youngest,
            vec![
                YoungestEmployee {
                    department_name: "Engineering".to_string(),
                    name: "Grace".to_string(),
                    age: 23,
                },
                YoungestEmployee {
                    department_name: "Sales".to_string(),
                    name: "Linus".to_string(),
                    age: 24,
                },
            ]
        );
    }

    #[test]
    fn dashboard_collects_all_aggregates() {
        let mut repo = MockRepository::new();
        repo.expect_department_highest_salaries()
            .times(1)
            .returning(|| {
                Ok(vec![DepartmentSalary {
                    department_name: "Engineering".to_string(),
                    highest_salary: 120_000.0,
                }])
            });
        repo.expect_salary_range_counts()
            .times(1)
            .returning(|| Ok(empty_brackets()));
        repo.expect_youngest_by_department()
            .times(1)
            .returning(|| Ok(birthdays()));
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let data = load_dashboard(&repo, today).expect("should load");

        assert_eq!(data.highest_salaries.len(), 1);
        assert_eq!(data.salary_ranges.len(), SALARY_BRACKETS.len());
        assert_eq!(data.youngest.len(), 2);
    }

    #[test]
    fn repository_failures_propagate() {
        let mut repo = MockRepository::new();
        repo.expect_department_highest_salaries()
            .times(2)
            .returning(|| Err(RepositoryError::DatabaseError("locked".to_string())));
        repo.expect_salary_range_counts().never();

        assert!(matches!(
            department_highest_salaries(&repo),
            Err(ServiceError::Repository(_))
        ));
        assert!(matches!(
            load_dashboard(&repo, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            Err(ServiceError::Repository(_))
        ));
    }
}
