use crate::config::PLACEHOLDER_BACKEND_URL;
use crate::errors::LoadError;
use crate::models::{Coupon, Customer, Order, Snapshot};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{path::PathBuf, sync::Arc};
use tokio::fs;
use tracing::debug;

pub const COUPONS_ENDPOINT: &str = "/api/coupons";
pub const ORDERS_ENDPOINT: &str = "/api/orders";
pub const CUSTOMERS_ENDPOINT: &str = "/api/customers";

/// Where dashboard records come from.
#[derive(Debug, Clone)]
pub enum DataSource {
    Http(HttpSource),
    File(FileSource),
    Fixed(Arc<Snapshot>),
}

impl DataSource {
    pub fn fixed(snapshot: Snapshot) -> Self {
        Self::Fixed(Arc::new(snapshot))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.base_url().to_owned(),
            Self::File(source) => source.path.display().to_string(),
            Self::Fixed(_) => "in-memory snapshot".to_owned(),
        }
    }

    pub async fn fetch_coupons(&self) -> Result<Vec<Coupon>, LoadError> {
        match self {
            Self::Http(source) => source.get_collection(COUPONS_ENDPOINT).await,
            Self::File(source) => Ok(source.read_snapshot().await?.coupons),
            Self::Fixed(snapshot) => Ok(snapshot.coupons.clone()),
        }
    }

    pub async fn fetch_orders(&self) -> Result<Vec<Order>, LoadError> {
        match self {
            Self::Http(source) => source.get_collection(ORDERS_ENDPOINT).await,
            Self::File(source) => Ok(source.read_snapshot().await?.orders),
            Self::Fixed(snapshot) => Ok(snapshot.orders.clone()),
        }
    }

    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, LoadError> {
        match self {
            Self::Http(source) => source.get_collection(CUSTOMERS_ENDPOINT).await,
            Self::File(source) => Ok(source.read_snapshot().await?.customers),
            Self::Fixed(snapshot) => Ok(snapshot.customers.clone()),
        }
    }

    /// Loads all three collections. The first failure aborts the load and
    /// whatever else was fetched is dropped.
    pub async fn load_snapshot(&self) -> Result<Snapshot, LoadError> {
        let snapshot = match self {
            Self::File(source) => source.read_snapshot().await?,
            Self::Fixed(snapshot) => snapshot.as_ref().clone(),
            Self::Http(_) => {
                let (coupons, orders, customers) = tokio::try_join!(
                    self.fetch_coupons(),
                    self.fetch_orders(),
                    self.fetch_customers()
                )?;
                Snapshot {
                    coupons,
                    orders,
                    customers,
                }
            }
        };

        debug!(
            coupons = snapshot.coupons.len(),
            orders = snapshot.orders.len(),
            customers = snapshot.customers.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: crate::config::normalize_base_url(&base_url.into()),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
    ) -> Result<Vec<T>, LoadError> {
        if self.base_url == PLACEHOLDER_BACKEND_URL {
            return Err(LoadError::Config(
                "BACKEND_URL is still the placeholder; point it at the dashboard backend".to_owned(),
            ));
        }

        let url = format!("{}{endpoint}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LoadError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|source| LoadError::Decode { endpoint, source })
    }
}

/// A JSON file holding `coupons`, `orders` and `customers` arrays.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_snapshot(&self) -> Result<Snapshot, LoadError> {
        let path = self.path.display().to_string();
        let bytes = fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Snapshot { path, source })
    }
}
