use crate::domain::dashboard::{DepartmentSalary, SalaryRangeCount, YoungestEmployee};

/// Data required to render the dashboard template.
#[derive(Debug, Default)]
pub struct DashboardPageData {
    pub highest_salaries: Vec<DepartmentSalary>,
    pub salary_ranges: Vec<SalaryRangeCount>,
    pub youngest: Vec<YoungestEmployee>,
}
