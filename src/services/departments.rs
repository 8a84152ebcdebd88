use crate::domain::department::Department;
use crate::repository::DepartmentReader;
use crate::services::ServiceResult;

/// Returns every department, active or not, ordered by id.
pub fn list_departments<R>(repo: &R) -> ServiceResult<Vec<Department>>
where
    R: DepartmentReader + ?Sized,
{
    Ok(repo.list_departments()?)
}
