//! Headless views: each one drives the API through the query layer, feeds
//! results into the store and exposes render-ready rows.

use std::sync::Arc;

use crate::client::api::EmployeeApi;
use crate::client::query::QueryClient;
use crate::client::store::AppStore;

pub mod dashboard;
pub mod form;
pub mod list;

/// Dependencies shared by every view.
#[derive(Clone)]
pub struct ClientContext {
    pub api: Arc<dyn EmployeeApi>,
    pub queries: QueryClient,
    pub store: AppStore,
}

impl ClientContext {
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self {
            api,
            queries: QueryClient::new(),
            store: AppStore::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Loading,
    Error,
    Ready,
}
