//! Read models backing the analytics dashboard.

use serde::{Deserialize, Serialize};

/// Highest salary paid within one department.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DepartmentSalary {
    pub department_name: String,
    pub highest_salary: f64,
}

/// Number of employees whose salary falls inside one bracket.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalaryRangeCount {
    pub salary_range: String,
    pub employee_count: i64,
}

/// Youngest employee of a department.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct YoungestEmployee {
    pub department_name: String,
    pub name: String,
    pub age: u32,
}

/// Salary interval `(above, up_to]`; a missing bound is open-ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalaryBracket {
    pub label: &'static str,
    pub above: Option<f64>,
    pub up_to: Option<f64>,
}

impl SalaryBracket {
    pub fn contains(&self, salary: f64) -> bool {
        self.above.is_none_or(|above| salary > above)
            && self.up_to.is_none_or(|up_to| salary <= up_to)
    }
}

/// Brackets reported by the salary range endpoint, in display order.
/// Consecutive brackets share a boundary so every salary lands in exactly one.
pub const SALARY_BRACKETS: [SalaryBracket; 4] = [
    SalaryBracket {
        label: "0 - 50000",
        above: None,
        up_to: Some(50_000.0),
    },
    SalaryBracket {
        label: "50001 - 100000",
        above: Some(50_000.0),
        up_to: Some(100_000.0),
    },
    SalaryBracket {
        label: "100001 - 150000",
        above: Some(100_000.0),
        up_to: Some(150_000.0),
    },
    SalaryBracket {
        label: "150001+",
        above: Some(150_000.0),
        up_to: None,
    },
];
