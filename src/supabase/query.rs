use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{SupabaseClient, SupabaseError};

#[derive(Debug)]
enum Operation {
    Select,
    Insert(Value),
    Update(Value),
    Delete,
}

/// One table read or write, built up PostgREST-style and executed once.
///
/// Filters, ordering and limits become query parameters
/// (`col=eq.v`, `order=col.asc`, `limit=n`); the operation picks the HTTP
/// method. Reads return the selected rows; writes ask PostgREST to echo the
/// affected rows back.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
    operation: Operation,
}

impl<'a> TableQuery<'a> {
    pub(super) fn new(client: &'a SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
            operation: Operation::Select,
        }
    }

    /// Columns (or embedded resources) to return, PostgREST `select=` syntax.
    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn gte(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("gte.{}", value.to_string())));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{}.{}", column, direction));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn insert(mut self, row: Value) -> Self {
        self.operation = Operation::Insert(row);
        self
    }

    pub fn update(mut self, changes: Value) -> Self {
        self.operation = Operation::Update(changes);
        self
    }

    pub fn delete(mut self) -> Self {
        self.operation = Operation::Delete;
        self
    }

    /// Execute and return raw JSON rows.
    pub async fn execute(self) -> Result<Vec<Value>, SupabaseError> {
        self.execute_as().await
    }

    /// Execute and deserialize the returned rows.
    pub async fn execute_as<T: DeserializeOwned>(self) -> Result<Vec<T>, SupabaseError> {
        let url = self.client.endpoint(&self.table)?;

        let mut query: Vec<(String, String)> = Vec::new();
        if matches!(self.operation, Operation::Select) {
            query.push(("select".to_string(), self.columns.clone()));
        }
        query.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            query.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }

        let http = &self.client.http;
        let request = match &self.operation {
            Operation::Select => http.get(url),
            Operation::Insert(row) => http
                .post(url)
                .header("Prefer", "return=representation")
                .json(row),
            Operation::Update(changes) => http
                .patch(url)
                .header("Prefer", "return=representation")
                .json(changes),
            Operation::Delete => http
                .delete(url)
                .header("Prefer", "return=representation"),
        };

        let response = self.client.authorize(request).query(&query).send().await?;
        SupabaseClient::read_json(response).await
    }
}
