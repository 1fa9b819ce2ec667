//! Seed data loading: bundled JSON, a local file, or an HTTP(S) endpoint.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::Profile;

/// Seed file compiled into the binary.
const BUNDLED_PROFILES: &str = include_str!("../../config/profiles.json");

/// Where the initial profile collection comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// The bundled `config/profiles.json`.
    #[default]
    Bundled,
    /// JSON file on disk.
    File(PathBuf),
    /// JSON document served over HTTP(S).
    Remote(String),
}

impl SeedSource {
    /// What: Interpret a CLI or settings value.
    ///
    /// Details:
    /// - `http://` and `https://` values are remote, `bundled` and the empty
    ///   string select the built-in seed, anything else is a file path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("bundled") {
            Self::Bundled
        } else if value.starts_with("http://") || value.starts_with("https://") {
            Self::Remote(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

/// What: Parse a seed document.
///
/// Inputs:
/// - `json`: JSON array of profile records
///
/// Output:
/// - Records in document order, or an error message.
///
/// # Errors
/// - Returns `Err` when the JSON is malformed or a record lacks a required field
/// - Returns `Err` when an id is zero or appears twice
pub fn parse_profiles(json: &str) -> Result<Vec<Profile>, String> {
    let profiles: Vec<Profile> =
        serde_json::from_str(json).map_err(|e| format!("invalid profile data: {e}"))?;
    let mut seen = HashSet::with_capacity(profiles.len());
    for p in &profiles {
        if p.id == 0 {
            return Err("invalid profile data: id 0 is reserved".to_string());
        }
        if !seen.insert(p.id) {
            return Err(format!("invalid profile data: duplicate id {}", p.id));
        }
    }
    Ok(profiles)
}

/// Records of the bundled seed file.
///
/// # Errors
/// - Returns `Err` if the bundled file is malformed
pub fn bundled_profiles() -> Result<Vec<Profile>, String> {
    parse_profiles(BUNDLED_PROFILES)
}

/// What: Build the HTTP client used for remote seeds.
///
/// Details:
/// - Short connect timeout; remote seeds are small documents.
fn http_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(20))
        .user_agent(format!("Diiwaan/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| format!("failed to create HTTP client: {e}"))
}

/// Fetch a seed document over HTTP(S).
async fn fetch_remote(url: &str) -> Result<String, String> {
    tracing::debug!(url, "fetching remote seed");
    let response = http_client()?
        .get(url)
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {e}"))?;
    if !response.status().is_success() {
        return Err(format!(
            "HTTP request failed with status: {}",
            response.status()
        ));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {e}"))
}

/// What: Load the initial profile collection.
///
/// Inputs:
/// - `source`: Where to read the seed from
///
/// Output:
/// - Records in seed order, or an error message for the alert dialog.
///
/// # Errors
/// - Returns `Err` when the file cannot be read, the request fails or the
///   document does not parse
///
/// Details:
/// - File reads run on the blocking pool so the event loop stays responsive.
pub async fn load_profiles(source: &SeedSource) -> Result<Vec<Profile>, String> {
    let body = match source {
        SeedSource::Bundled => return bundled_profiles(),
        SeedSource::File(path) => {
            let path = path.clone();
            tokio::task::spawn_blocking(move || {
                std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))
            })
            .await
            .map_err(|e| format!("seed loader task failed: {e}"))??
        }
        SeedSource::Remote(url) => fetch_remote(url).await?,
    };
    let profiles = parse_profiles(&body)?;
    tracing::info!(count = profiles.len(), source = %source, "loaded seed profiles");
    Ok(profiles)
}
