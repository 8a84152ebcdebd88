//! Paginated employee table.

use crate::client::query::{QueryData, QueryKey};
use crate::client::store::Action;
use crate::client::views::{ClientContext, ViewStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub salary: f64,
    pub edit_link: String,
}

/// Inputs of the table pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
    pub count: usize,
    /// Zero-based.
    pub page: usize,
    pub rows_per_page: usize,
}

pub struct EmployeeListView {
    ctx: ClientContext,
    status: ViewStatus,
}

impl EmployeeListView {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            status: ViewStatus::Loading,
        }
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    /// Fetches the current page and the departments concurrently and feeds
    /// both into the store.
    pub async fn mount(&mut self) {
        self.status = ViewStatus::Loading;
        let pagination = self.ctx.store.employees();
        let (page, page_size) = (pagination.page, pagination.page_size);

        let api = self.ctx.api.clone();
        let employees = self
            .ctx
            .queries
            .fetch(QueryKey::Employees { page, page_size }, move || async move {
                api.list_employees(page, page_size)
                    .await
                    .map(QueryData::Employees)
            });

        let api = self.ctx.api.clone();
        let departments = self
            .ctx
            .queries
            .fetch(QueryKey::Departments, move || async move {
                api.list_departments().await.map(QueryData::Departments)
            });

        let (employees, departments) = futures::join!(employees, departments);

        let loaded = match (employees, departments) {
            (Ok(QueryData::Employees(page)), Ok(QueryData::Departments(departments))) => {
                Some((page, departments))
            }
            (Err(err), _) | (_, Err(err)) => {
                log::error!("Failed to load the employee list: {err}");
                None
            }
            _ => None,
        };

        // Nothing reaches the store unless both requests succeeded.
        self.status = match loaded {
            Some((page, departments)) => {
                self.ctx.store.dispatch(Action::SetEmployees {
                    employees: page.employees,
                    total_pages: page.total_pages,
                });
                self.ctx.store.dispatch(Action::SetDepartments(departments));
                ViewStatus::Ready
            }
            None => ViewStatus::Error,
        };
    }

    /// `selected` comes from the pagination control and is zero-based.
    pub async fn change_page(&mut self, selected: usize) {
        self.ctx.store.dispatch(Action::SetPage(selected + 1));
        self.mount().await;
    }

    pub async fn change_rows_per_page(&mut self, rows_per_page: usize) {
        self.ctx.store.dispatch(Action::SetPageSize(rows_per_page));
        self.mount().await;
    }

    pub fn rows(&self) -> Vec<EmployeeListRow> {
        self.ctx
            .store
            .employees()
            .employees
            .iter()
            .map(|employee| EmployeeListRow {
                id: employee.id.get(),
                name: employee.name.to_string(),
                phone: employee.phone.to_string(),
                email: employee.email.to_string(),
                salary: employee.salary.get(),
                edit_link: format!("/edit-employee/{}", employee.id),
            })
            .collect()
    }

    pub fn pagination(&self) -> PaginationControl {
        let state = self.ctx.store.employees();
        PaginationControl {
            count: state.total_pages * state.page_size,
            page: state.page.saturating_sub(1),
            rows_per_page: state.page_size,
        }
    }
}
