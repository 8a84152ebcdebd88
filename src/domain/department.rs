use serde::{Deserialize, Serialize};

use crate::domain::types::{DepartmentId, DepartmentName};

/// Reference entity categorizing employees. Read-only for this application.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: DepartmentName,
    pub status: bool,
}

/// Resolves the display name of `id` within `departments`.
pub fn department_name(departments: &[Department], id: DepartmentId) -> Option<&str> {
    departments
        .iter()
        .find(|department| department.id == id)
        .map(|department| department.name.as_str())
}

/// Finds a department by its display name.
pub fn find_by_name<'a>(departments: &'a [Department], name: &str) -> Option<&'a Department> {
    departments
        .iter()
        .find(|department| department.name.as_str() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departments() -> Vec<Department> {
        vec![
            Department {
                id: DepartmentId::new(1).unwrap(),
                name: DepartmentName::new("Engineering").unwrap(),
                status: true,
            },
            Department {
                id: DepartmentId::new(2).unwrap(),
                name: DepartmentName::new("Sales").unwrap(),
                status: false,
            },
        ]
    }

    #[test]
    fn resolves_name_from_id() {
        let departments = departments();
        let id = DepartmentId::new(2).unwrap();

        assert_eq!(department_name(&departments, id), Some("Sales"));
        assert_eq!(
            department_name(&departments, DepartmentId::new(9).unwrap()),
            None
        );
    }

    #[test]
    fn finds_department_by_name() {
        let departments = departments();

        let found = find_by_name(&departments, "Engineering").expect("department exists");
        assert_eq!(found.id.get(), 1);
        assert!(find_by_name(&departments, "Legal").is_none());
    }
}
