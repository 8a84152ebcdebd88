#![allow(dead_code)]

use chrono::NaiveDate;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_employees::db::{DbPool, PoolOptions, establish_connection_pool};
use pushkind_employees::domain::employee::NewEmployee;
use pushkind_employees::domain::types::{
    DepartmentId, EmployeeEmail, EmployeeName, PhoneNumber, Salary,
};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in its own temporary directory.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let options = PoolOptions {
            max_size: 2,
            ..PoolOptions::default()
        };
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"), &options)
            .expect("create pool");
        pool.get()
            .expect("get connection")
            .run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn new_employee(name: &str, salary: f64, dob: (i32, u32, u32), department: i32) -> NewEmployee {
    let slug = name.to_lowercase().replace(' ', ".");
    NewEmployee {
        name: EmployeeName::new(name).unwrap(),
        phone: PhoneNumber::new("5551234567").unwrap(),
        email: EmployeeEmail::new(format!("{slug}@example.com")).unwrap(),
        salary: Salary::new(salary).unwrap(),
        dob: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
        department_id: DepartmentId::new(department).unwrap(),
        photo: None,
        status: true,
    }
}
