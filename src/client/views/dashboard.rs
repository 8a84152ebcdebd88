//! Analytics dashboard: three read-only tables loaded together.

use crate::client::query::{QueryData, QueryKey, QueryResult};
use crate::client::views::{ClientContext, ViewStatus};
use crate::domain::dashboard::{DepartmentSalary, SalaryRangeCount, YoungestEmployee};

pub struct DashboardView {
    ctx: ClientContext,
    highest_salaries: Vec<DepartmentSalary>,
    salary_ranges: Vec<SalaryRangeCount>,
    youngest: Vec<YoungestEmployee>,
    status: ViewStatus,
}

impl DashboardView {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            highest_salaries: Vec::new(),
            salary_ranges: Vec::new(),
            youngest: Vec::new(),
            status: ViewStatus::Loading,
        }
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    /// Loads all three aggregates concurrently. On failure the tables stay
    /// empty.
    pub async fn load(&mut self) {
        self.status = ViewStatus::Loading;

        let api = self.ctx.api.clone();
        let highest = self
            .ctx
            .queries
            .fetch(QueryKey::HighestSalaries, move || async move {
                api.department_highest_salaries()
                    .await
                    .map(QueryData::HighestSalaries)
            });
        let api = self.ctx.api.clone();
        let ranges = self
            .ctx
            .queries
            .fetch(QueryKey::SalaryRanges, move || async move {
                api.salary_range_counts().await.map(QueryData::SalaryRanges)
            });
        let api = self.ctx.api.clone();
        let youngest = self
            .ctx
            .queries
            .fetch(QueryKey::YoungestByDepartment, move || async move {
                api.youngest_by_department()
                    .await
                    .map(QueryData::YoungestByDepartment)
            });

        let results: [QueryResult; 3] = {
            let (highest, ranges, youngest) = futures::join!(highest, ranges, youngest);
            [highest, ranges, youngest]
        };

        let mut highest_salaries = Vec::new();
        let mut salary_ranges = Vec::new();
        let mut youngest = Vec::new();
        for result in results {
            match result {
                Ok(QueryData::HighestSalaries(rows)) => highest_salaries = rows,
                Ok(QueryData::SalaryRanges(rows)) => salary_ranges = rows,
                Ok(QueryData::YoungestByDepartment(rows)) => youngest = rows,
                Ok(_) => {}
                Err(err) => {
                    log::error!("Error fetching dashboard data: {err}");
                    self.status = ViewStatus::Error;
                    return;
                }
            }
        }

        self.highest_salaries = highest_salaries;
        self.salary_ranges = salary_ranges;
        self.youngest = youngest;
        self.status = ViewStatus::Ready;
    }

    /// `(department, "$<salary>")`
    pub fn highest_salary_rows(&self) -> Vec<(String, String)> {
        self.highest_salaries
            .iter()
            .map(|row| {
                (
                    row.department_name.clone(),
                    format!("${}", row.highest_salary),
                )
            })
            .collect()
    }

    /// `(range, "<n> Employees")`
    pub fn salary_range_rows(&self) -> Vec<(String, String)> {
        self.salary_ranges
            .iter()
            .map(|row| {
                (
                    row.salary_range.clone(),
                    format!("{} Employees", row.employee_count),
                )
            })
            .collect()
    }

    /// `(department, name, "<n> years old")`
    pub fn youngest_rows(&self) -> Vec<(String, String, String)> {
        self.youngest
            .iter()
            .map(|row| {
                (
                    row.department_name.clone(),
                    row.name.clone(),
                    format!("{} years old", row.age),
                )
            })
            .collect()
    }
}
