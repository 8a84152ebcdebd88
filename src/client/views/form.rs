//! Add / edit employee form with its delete confirmation modal.

use std::collections::BTreeMap;

use crate::client::query::{QueryData, QueryKey};
use crate::client::store::Action;
use crate::client::views::{ClientContext, ViewStatus};
use crate::domain::department::{department_name, find_by_name};
use crate::domain::types::DepartmentId;
use crate::forms::employee::{EmployeeForm, parse_salary};

/// Where the application goes once the form is done.
pub const HOME: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(BTreeMap<String, String>),
    Saved,
    /// The request was sent and failed.
    Failed(String),
}

impl SubmitOutcome {
    pub fn navigate_to(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Saved | SubmitOutcome::Failed(_) => Some(HOME),
        }
    }
}

pub struct EmployeeFormView {
    ctx: ClientContext,
    mode: FormMode,
    form: EmployeeForm,
    errors: BTreeMap<String, String>,
    delete_modal_open: bool,
    status: ViewStatus,
}

impl EmployeeFormView {
    pub fn new(ctx: ClientContext, mode: FormMode) -> Self {
        Self {
            ctx,
            mode,
            form: EmployeeForm::default(),
            errors: BTreeMap::new(),
            delete_modal_open: false,
            status: ViewStatus::Loading,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn is_delete_modal_open(&self) -> bool {
        self.delete_modal_open
    }

    /// Loads departments and, in edit mode, the employee being edited.
    pub async fn mount(&mut self) {
        self.status = ViewStatus::Loading;

        let api = self.ctx.api.clone();
        match self
            .ctx
            .queries
            .fetch(QueryKey::Departments, move || async move {
                api.list_departments().await.map(QueryData::Departments)
            })
            .await
        {
            Ok(QueryData::Departments(departments)) => {
                self.ctx.store.dispatch(Action::SetDepartments(departments))
            }
            Ok(_) => {}
            Err(err) => {
                log::error!("Failed to load departments: {err}");
                self.status = ViewStatus::Error;
                return;
            }
        }

        match self.mode {
            FormMode::Create => {
                if self.form.department_id == 0 {
                    let departments = self.ctx.store.departments();
                    if let Some(first) = departments.first() {
                        self.form.department_id = first.id.get();
                    }
                }
                self.status = ViewStatus::Ready;
            }
            FormMode::Edit(id) => {
                let api = self.ctx.api.clone();
                match self
                    .ctx
                    .queries
                    .fetch(QueryKey::Employee(id), move || async move {
                        api.get_employee(id).await.map(QueryData::Employee)
                    })
                    .await
                {
                    Ok(QueryData::Employee(employee)) => {
                        self.form = EmployeeForm {
                            id: None,
                            ..EmployeeForm::from(&employee)
                        };
                        self.status = ViewStatus::Ready;
                    }
                    Ok(_) => self.status = ViewStatus::Error,
                    Err(err) => {
                        log::error!("Failed to load employee {id}: {err}");
                        self.status = ViewStatus::Error;
                    }
                }
            }
        }
    }

    /// Applies a raw input change the way the browser form reports it.
    /// Unknown field names are ignored.
    pub fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "name" => self.form.name = value.to_string(),
            "phone" => self.form.phone = value.to_string(),
            "email" => self.form.email = value.to_string(),
            "salary" => self.form.salary = parse_salary(value),
            "dob" => self.form.dob = value.to_string(),
            "department_id" => self.form.department_id = value.trim().parse().unwrap_or(0),
            "photo" => self.form.photo = Some(value.to_string()),
            "status" => self.form.status = value == "true",
            _ => log::debug!("Ignoring change to unknown field {name}"),
        }
    }

    /// Selects a department by display name; returns `false` when no such
    /// department is loaded.
    pub fn select_department(&mut self, name: &str) -> bool {
        match find_by_name(&self.ctx.store.departments(), name) {
            Some(department) => {
                self.form.department_id = department.id.get();
                true
            }
            None => false,
        }
    }

    /// Name shown in the selector; `None` renders an empty selection.
    pub fn selected_department_name(&self) -> Option<String> {
        let id = DepartmentId::new(self.form.department_id).ok()?;
        department_name(&self.ctx.store.departments(), id).map(str::to_string)
    }

    pub fn validate(&mut self) -> bool {
        self.errors = self.form.field_errors();
        self.errors.is_empty()
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        let result = match self.mode {
            FormMode::Create => self.ctx.api.create_employee(&self.form).await,
            FormMode::Edit(id) => self.ctx.api.update_employee(id, &self.form).await,
        };

        match result {
            Ok(_) => {
                self.ctx.queries.invalidate_employees();
                SubmitOutcome::Saved
            }
            Err(err) => {
                log::error!("Failed to save employee: {err}");
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }

    /// Only available in edit mode.
    pub fn open_delete_modal(&mut self) -> bool {
        self.delete_modal_open = matches!(self.mode, FormMode::Edit(_));
        self.delete_modal_open
    }

    pub fn cancel_delete(&mut self) {
        self.delete_modal_open = false;
    }

    /// Deletes the employee; the modal closes whatever the outcome.
    pub async fn confirm_delete(&mut self) -> SubmitOutcome {
        let FormMode::Edit(id) = self.mode else {
            self.delete_modal_open = false;
            return SubmitOutcome::Invalid(BTreeMap::new());
        };

        let result = self.ctx.api.delete_employee(id).await;
        self.delete_modal_open = false;

        match result {
            Ok(_) => {
                self.ctx.queries.invalidate_employees();
                SubmitOutcome::Saved
            }
            Err(err) => {
                log::error!("Failed to delete employee {id}: {err}");
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::client::views::fake::{FakeApi, department};

    fn view_with(api: Arc<FakeApi>, mode: FormMode) -> EmployeeFormView {
        EmployeeFormView::new(ClientContext::new(api), mode)
    }

    fn fill_valid(view: &mut EmployeeFormView) {
        view.set_field("name", "Ada Lovelace");
        view.set_field("phone", "5551234567");
        view.set_field("email", "ada@example.com");
        view.set_field("dob", "1990-04-01");
    }

    #[tokio::test]
    async fn create_mode_preselects_first_department() {
        let api = Arc::new(FakeApi::with_departments(vec![
            department(3, "Finance"),
            department(4, "Sales"),
        ]));
        let mut view = view_with(api, FormMode::Create);

        view.mount().await;

        assert_eq!(view.status(), ViewStatus::Ready);
        assert_eq!(view.form().department_id, 3);
        assert_eq!(view.form().salary, 30_000.0);
        assert!(view.form().status);
        assert_eq!(view.selected_department_name().as_deref(), Some("Finance"));
    }

    #[tokio::test]
    async fn create_mode_tolerates_no_departments() {
        let api = Arc::new(FakeApi::with_departments(vec![]));
        let mut view = view_with(api, FormMode::Create);

        view.mount().await;

        assert_eq!(view.status(), ViewStatus::Ready);
        assert_eq!(view.form().department_id, 0);
        assert_eq!(view.selected_department_name(), None);
    }

    #[tokio::test]
    async fn edit_mode_hydrates_without_server_fields() {
        let api = Arc::new(FakeApi::with_departments(vec![department(1, "Engineering")]));
        let mut view = view_with(api, FormMode::Edit(7));

        view.mount().await;

        assert_eq!(view.status(), ViewStatus::Ready);
        assert_eq!(view.form().id, None);
        assert_eq!(view.form().name, "Employee 7");
        assert_eq!(view.form().dob, "1990-04-01");
    }

    #[tokio::test]
    async fn edit_mode_reports_missing_employee() {
        let api = Arc::new(FakeApi::with_departments(vec![department(1, "Engineering")]));
        let mut view = view_with(api, FormMode::Edit(404));

        view.mount().await;

        assert_eq!(view.status(), ViewStatus::Error);
    }

    #[tokio::test]
    async fn invalid_phone_never_reaches_the_network() {
        let api = Arc::new(FakeApi::with_departments(vec![department(1, "Engineering")]));
        let mut view = view_with(api.clone(), FormMode::Create);
        view.mount().await;
        fill_valid(&mut view);
        view.set_field("phone", "12345");

        let outcome = view.submit().await;

        assert_eq!(outcome.navigate_to(), None);
        assert_eq!(view.errors()["phone"], "Invalid phone number");
        assert_eq!(api.write_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn editing_only_department_sends_same_fields() {
        let api = Arc::new(FakeApi::with_departments(vec![
            department(1, "Engineering"),
            department(2, "Finance"),
        ]));
        let mut view = view_with(api.clone(), FormMode::Edit(5));
        view.mount().await;
        let before = view.form().clone();

        assert!(view.select_department("Finance"));
        let outcome = view.submit().await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(outcome.navigate_to(), Some("/"));
        let sent = api.last_written.lock().unwrap().clone().unwrap();
        assert_eq!(sent.department_id, 2);
        assert_eq!(
            sent,
            EmployeeForm {
                department_id: 2,
                ..before
            }
        );
    }

    #[test]
    fn status_field_parses_true_only() {
        let api = Arc::new(FakeApi::default());
        let mut view = view_with(api, FormMode::Create);

        view.set_field("status", "false");
        assert!(!view.form().status);
        view.set_field("status", "true");
        assert!(view.form().status);
    }

    #[test]
    fn unparseable_salary_is_reported_as_missing() {
        let api = Arc::new(FakeApi::default());
        let mut view = view_with(api, FormMode::Create);
        fill_valid(&mut view);

        view.set_field("salary", "abc");
        assert!(!view.validate());
        assert_eq!(view.errors()["salary"], "Salary is required");

        view.set_field("salary", "-10");
        assert!(!view.validate());
        assert_eq!(view.errors()["salary"], "Salary must be positive");

        view.set_field("salary", "42000");
        assert_eq!(view.form().salary, 42_000.0);
    }

    #[tokio::test]
    async fn delete_requires_confirmation() {
        let api = Arc::new(FakeApi::with_departments(vec![department(1, "Engineering")]));
        let mut view = view_with(api.clone(), FormMode::Edit(5));

        assert!(view.open_delete_modal());
        view.cancel_delete();
        assert!(!view.is_delete_modal_open());
        assert_eq!(api.delete_calls.load(Ordering::SeqCst), 0);

        view.open_delete_modal();
        let outcome = view.confirm_delete().await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert!(!view.is_delete_modal_open());
        assert_eq!(api.delete_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_delete_still_closes_modal() {
        let api = Arc::new(FakeApi {
            fail_delete: true,
            ..FakeApi::default()
        });
        let mut view = view_with(api, FormMode::Edit(5));
        view.open_delete_modal();

        let outcome = view.confirm_delete().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(outcome.navigate_to(), Some("/"));
        assert!(!view.is_delete_modal_open());
    }

    #[test]
    fn create_mode_has_no_delete() {
        let api = Arc::new(FakeApi::default());
        let mut view = view_with(api, FormMode::Create);

        assert!(!view.open_delete_modal());
    }
}
