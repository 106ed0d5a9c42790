//! Demo data loading from the CSV fixtures in `FIXTURE_DIR`.
//!
//! Rows go through the same store inserts as the API. A fixture's own
//! `createdAt` is kept when present, otherwise the row is stamped now.

use serde::{Deserialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;

use crate::{
    db,
    error::AppError,
    models::{BusinessInput, FieldValue, LogInput, UserInput},
    state::AppState,
};

/// Which table a fixture file feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    Users,
    Businesses,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSize {
    Full,
    Small,
}

impl Fixture {
    pub fn file_name(self, size: FixtureSize) -> &'static str {
        match (self, size) {
            (Fixture::Users, FixtureSize::Full) => "dummy_user_data.csv",
            (Fixture::Users, FixtureSize::Small) => "small_dummy_user_data.csv",
            (Fixture::Businesses, FixtureSize::Full) => "dummy_business_data.csv",
            (Fixture::Businesses, FixtureSize::Small) => "small_dummy_business_data.csv",
            (Fixture::Logs, FixtureSize::Full) => "dummy_logs_data.csv",
            (Fixture::Logs, FixtureSize::Small) => "small_dummy_logs_data.csv",
        }
    }

    /// Human readable name used in acknowledgements and logs, e.g. "Small dummy user data"
    pub fn describe(self, size: FixtureSize) -> String {
        let entity = match self {
            Fixture::Users => "user",
            Fixture::Businesses => "business",
            Fixture::Logs => "logs",
        };
        match size {
            FixtureSize::Full => format!("Dummy {entity} data"),
            FixtureSize::Small => format!("Small dummy {entity} data"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to store fixture row: {0}")]
    Storage(#[from] AppError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRow {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postcode: Option<String>,
    username: Option<String>,
    password: Option<String>,
    role: Option<String>,
    created_at: Option<String>,
    department_name: Option<String>,
    #[serde(rename = "businessID", default, deserialize_with = "csv::invalid_option")]
    business_id: Option<i64>,
}

impl UserRow {
    fn into_parts(self) -> (UserInput, Option<String>) {
        let input = UserInput {
            first_name: self.first_name.map(FieldValue::from),
            last_name: self.last_name.map(FieldValue::from),
            email: self.email.map(FieldValue::from),
            phone: self.phone.map(FieldValue::from),
            address: self.address.map(FieldValue::from),
            city: self.city.map(FieldValue::from),
            state: self.state.map(FieldValue::from),
            country: self.country.map(FieldValue::from),
            postcode: self.postcode.map(FieldValue::from),
            username: self.username.map(FieldValue::from),
            password: self.password.map(FieldValue::from),
            role: self.role.map(FieldValue::from),
            department_name: self.department_name.map(FieldValue::from),
            business_id: self.business_id.map(FieldValue::from),
        };
        (input, self.created_at)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BusinessRow {
    business_name: Option<String>,
    contact_type: Option<String>,
    contact_date: Option<String>,
    notes: Option<String>,
    created_at: Option<String>,
    #[serde(rename = "userID", default, deserialize_with = "csv::invalid_option")]
    user_id: Option<i64>,
}

impl BusinessRow {
    fn into_parts(self) -> (BusinessInput, Option<String>) {
        let input = BusinessInput {
            business_name: self.business_name.map(FieldValue::from),
            contact_type: self.contact_type.map(FieldValue::from),
            contact_date: self.contact_date.map(FieldValue::from),
            notes: self.notes.map(FieldValue::from),
            user_id: self.user_id.map(FieldValue::from),
        };
        (input, self.created_at)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogRow {
    #[serde(rename = "businessID", default, deserialize_with = "csv::invalid_option")]
    business_id: Option<i64>,
    #[serde(rename = "userID", default, deserialize_with = "csv::invalid_option")]
    user_id: Option<i64>,
    log_date: Option<String>,
    log_type: Option<String>,
    notes: Option<String>,
    created_at: Option<String>,
}

impl LogRow {
    fn into_parts(self) -> (LogInput, Option<String>) {
        let input = LogInput {
            business_id: self.business_id.map(FieldValue::from),
            user_id: self.user_id.map(FieldValue::from),
            log_date: self.log_date.map(FieldValue::from),
            log_type: self.log_type.map(FieldValue::from),
            notes: self.notes.map(FieldValue::from),
        };
        (input, self.created_at)
    }
}

/// Parse every well-formed row of a fixture. Rows that do not fit the entity
/// are skipped with a warning; an unreadable file or header is an error.
async fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FixtureError> {
    let data = tokio::fs::read(path).await.map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_slice());

    // Surface a broken header as an error instead of skipping every row
    reader.headers()?;

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => tracing::warn!(path = %path.display(), row = index + 1, "skipping fixture row: {e}"),
        }
    }

    Ok(rows)
}

fn created_at_or_now(created_at: Option<String>) -> String {
    created_at
        .filter(|value| !value.is_empty())
        .unwrap_or_else(db::now_iso8601)
}

/// Load one fixture file into its table. Returns the number of rows inserted.
pub async fn import(
    state: &AppState,
    fixture: Fixture,
    size: FixtureSize,
) -> Result<usize, FixtureError> {
    let path = Path::new(&state.config.fixture_dir).join(fixture.file_name(size));
    let mut inserted = 0;

    match fixture {
        Fixture::Users => {
            for row in read_rows::<UserRow>(&path).await? {
                let (user, created_at) = row.into_parts();
                state
                    .users
                    .insert_user(&user, &created_at_or_now(created_at))
                    .await?;
                inserted += 1;
            }
        }
        Fixture::Businesses => {
            for row in read_rows::<BusinessRow>(&path).await? {
                let (business, created_at) = row.into_parts();
                state
                    .businesses
                    .insert_business(&business, &created_at_or_now(created_at))
                    .await?;
                inserted += 1;
            }
        }
        Fixture::Logs => {
            for row in read_rows::<LogRow>(&path).await? {
                let (log, created_at) = row.into_parts();
                state
                    .logs
                    .insert_log(&log, &created_at_or_now(created_at))
                    .await?;
                inserted += 1;
            }
        }
    }

    Ok(inserted)
}

/// Run an import in the background. Completion is only visible in the logs
/// and in later list queries.
pub fn spawn_import(state: AppState, fixture: Fixture, size: FixtureSize) -> JoinHandle<()> {
    tokio::spawn(async move {
        let name = fixture.describe(size);
        match import(&state, fixture, size).await {
            Ok(rows) => tracing::info!(rows, "{name} added successfully."),
            Err(e) => tracing::error!("{name} import failed: {e}"),
        }
    })
}

/// First-boot seeding: start a full import for every table that is empty.
pub async fn seed_empty_tables(state: &AppState) -> Result<Vec<JoinHandle<()>>, FixtureError> {
    let mut handles = Vec::new();

    let counts = [
        (Fixture::Users, state.users.count_users().await?),
        (Fixture::Businesses, state.businesses.count_businesses().await?),
        (Fixture::Logs, state.logs.count_logs().await?),
    ];

    for (fixture, count) in counts {
        if count > 0 {
            continue;
        }

        let path = Path::new(&state.config.fixture_dir).join(fixture.file_name(FixtureSize::Full));
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::warn!(path = %path.display(), "table is empty but no fixture to seed it from");
            continue;
        }

        tracing::info!(?fixture, "seeding empty table");
        handles.push(spawn_import(state.clone(), fixture, FixtureSize::Full));
    }

    Ok(handles)
}
