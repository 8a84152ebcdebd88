//! Normalized client state: an employees slice with pagination and a
//! departments slice, each updated by its own reducer.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::department::Department;
use crate::domain::employee::Employee;
use crate::repository::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub enum Action {
    SetEmployees {
        employees: Vec<Employee>,
        total_pages: usize,
    },
    /// One-based page number.
    SetPage(usize),
    /// Also resets the page to 1.
    SetPageSize(usize),
    SetDepartments(Vec<Department>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeState {
    pub employees: Vec<Employee>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl Default for EmployeeState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 1,
        }
    }
}

impl EmployeeState {
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::SetEmployees {
                employees,
                total_pages,
            } => {
                self.employees = employees.clone();
                self.total_pages = *total_pages;
            }
            Action::SetPage(page) => self.page = (*page).max(1),
            Action::SetPageSize(page_size) => {
                self.page_size = (*page_size).max(1);
                self.page = 1;
            }
            Action::SetDepartments(_) => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentState {
    pub departments: Vec<Department>,
}

impl DepartmentState {
    pub fn reduce(&mut self, action: &Action) {
        if let Action::SetDepartments(departments) = action {
            self.departments = departments.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub employees: EmployeeState,
    pub departments: DepartmentState,
}

impl AppState {
    pub fn reduce(&mut self, action: &Action) {
        self.employees.reduce(action);
        self.departments.reduce(action);
    }
}

/// Cloneable handle to the shared state; subscribers are notified after
/// every dispatch.
#[derive(Clone)]
pub struct AppStore {
    sender: Arc<watch::Sender<AppState>>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn dispatch(&self, action: Action) {
        log::debug!("Dispatching {action:?}");
        self.sender.send_modify(|state| state.reduce(&action));
    }

    pub fn state(&self) -> AppState {
        self.sender.borrow().clone()
    }

    pub fn employees(&self) -> EmployeeState {
        self.sender.borrow().employees.clone()
    }

    pub fn departments(&self) -> Vec<Department> {
        self.sender.borrow().departments.departments.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.sender.subscribe()
    }
}
