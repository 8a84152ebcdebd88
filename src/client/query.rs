//! Per-key de-duplicating fetch layer.
//!
//! Concurrent reads with the same [`QueryKey`] share one in-flight request.
//! The last successful value of each key is cached and a failed request
//! raises the key's error flag until the next success.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use crate::client::error::{ClientError, ClientResult};
use crate::domain::dashboard::{DepartmentSalary, SalaryRangeCount, YoungestEmployee};
use crate::domain::department::Department;
use crate::domain::employee::Employee;
use crate::dto::api::EmployeesPage;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Employees { page: usize, page_size: usize },
    Employee(i32),
    Departments,
    HighestSalaries,
    SalaryRanges,
    YoungestByDepartment,
}

impl QueryKey {
    /// Keys whose data goes stale when an employee is written.
    pub fn is_employee_key(&self) -> bool {
        matches!(self, QueryKey::Employees { .. } | QueryKey::Employee(_))
    }
}

#[derive(Debug, Clone)]
pub enum QueryData {
    Employees(EmployeesPage),
    Employee(Employee),
    Departments(Vec<Department>),
    HighestSalaries(Vec<DepartmentSalary>),
    SalaryRanges(Vec<SalaryRangeCount>),
    YoungestByDepartment(Vec<YoungestEmployee>),
}

/// Errors are shared between every caller that joined the request.
pub type QueryResult = Result<QueryData, Arc<ClientError>>;

type SharedQuery = Shared<BoxFuture<'static, QueryResult>>;

/// Snapshot of one key.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub data: Option<QueryData>,
    pub is_fetching: bool,
    pub is_error: bool,
}

#[derive(Default)]
struct Queries {
    in_flight: HashMap<QueryKey, (u64, SharedQuery)>,
    cache: HashMap<QueryKey, QueryData>,
    errors: HashSet<QueryKey>,
    next_generation: u64,
}

#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Arc<Mutex<Queries>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Queries> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `fetcher` unless a request for `key` is already in flight, in
    /// which case the caller waits for that request and `fetcher` is never
    /// invoked.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<QueryData>> + Send + 'static,
    {
        let (generation, request) = {
            let mut queries = self.lock();
            match queries.in_flight.get(&key) {
                Some((generation, request)) => (*generation, request.clone()),
                None => {
                    let generation = queries.next_generation;
                    queries.next_generation += 1;
                    let request = fetcher().map(|result| result.map_err(Arc::new)).boxed().shared();
                    queries
                        .in_flight
                        .insert(key.clone(), (generation, request.clone()));
                    (generation, request)
                }
            }
        };

        let result = request.await;
        self.settle(&key, generation, &result);
        result
    }

    /// Records the outcome once; later waiters of the same generation find
    /// the entry already removed.
    fn settle(&self, key: &QueryKey, generation: u64, result: &QueryResult) {
        let mut queries = self.lock();
        let current = matches!(queries.in_flight.get(key), Some((g, _)) if *g == generation);
        if !current {
            return;
        }
        queries.in_flight.remove(key);

        match result {
            Ok(data) => {
                queries.cache.insert(key.clone(), data.clone());
                queries.errors.remove(key);
            }
            Err(err) => {
                log::error!("Query {key:?} failed: {err}");
                queries.errors.insert(key.clone());
            }
        }
    }

    pub fn state(&self, key: &QueryKey) -> QueryState {
        let queries = self.lock();
        QueryState {
            data: queries.cache.get(key).cloned(),
            is_fetching: queries.in_flight.contains_key(key),
            is_error: queries.errors.contains(key),
        }
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.lock().in_flight.contains_key(key)
    }

    /// Drops cached employee pages and records so the next mount refetches.
    pub fn invalidate_employees(&self) {
        let mut queries = self.lock();
        queries.cache.retain(|key, _| !key.is_employee_key());
        queries.errors.retain(|key| !key.is_employee_key());
    }
}
