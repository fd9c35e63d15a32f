use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub post_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

/// A record stored by the mock service. The server owns the `id` field.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn set_id(&mut self, id: u64);
}

impl Record for Comment {
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Record for User {
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Records keyed by id; iteration order is id order.
pub struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

pub type Db<T> = Arc<RwLock<Table<T>>>;

pub fn app() -> Router {
    Router::new()
        .merge(resource_routes::<Comment>("/comments"))
        .merge(resource_routes::<User>("/users"))
}

fn resource_routes<T: Record>(path: &str) -> Router {
    let db: Db<T> = Arc::new(RwLock::new(Table::default()));
    Router::new()
        .route(path, get(list::<T>).post(create::<T>))
        .route(
            &format!("{path}/{{id}}"),
            get(fetch::<T>).put(replace::<T>).delete(remove::<T>),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list<T: Record>(State(db): State<Db<T>>) -> Json<Vec<T>> {
    let table = db.read().await;
    Json(table.rows.values().cloned().collect())
}

async fn create<T: Record>(
    State(db): State<Db<T>>,
    Json(mut input): Json<T>,
) -> (StatusCode, Json<T>) {
    let mut table = db.write().await;
    let id = table.next_id;
    table.next_id += 1;
    input.set_id(id);
    table.rows.insert(id, input.clone());
    info!(id, "created record");
    (StatusCode::CREATED, Json(input))
}

async fn fetch<T: Record>(
    State(db): State<Db<T>>,
    Path(id): Path<u64>,
) -> Result<Json<T>, StatusCode> {
    let table = db.read().await;
    table.rows.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace<T: Record>(
    State(db): State<Db<T>>,
    Path(id): Path<u64>,
    Json(mut input): Json<T>,
) -> Result<Json<T>, StatusCode> {
    let mut table = db.write().await;
    let row = table.rows.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    input.set_id(id);
    *row = input.clone();
    Ok(Json(input))
}

async fn remove<T: Record>(
    State(db): State<Db<T>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    let mut table = db.write().await;
    table
        .rows
        .remove(&id)
        .map(|_| Json(json!({})))
        .ok_or(StatusCode::NOT_FOUND)
}
