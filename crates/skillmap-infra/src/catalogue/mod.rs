//! Course catalogue loading.
//!
//! The catalogue is a JSON array of course records read once at startup
//! and never written back. A missing file yields an empty catalogue with
//! a warning so the service still comes up; malformed JSON is an error.

use std::path::Path;

use tracing::{info, warn};

use skillmap_types::course::Course;
use skillmap_types::error::CatalogueError;

/// Load the course catalogue from `path`.
pub async fn load_catalogue(path: &Path) -> Result<Vec<Course>, CatalogueError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                "no course catalogue at {}, starting with an empty catalogue",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(CatalogueError::Io(err)),
    };

    let courses: Vec<Course> =
        serde_json::from_str(&content).map_err(|e| CatalogueError::Parse(e.to_string()))?;
    info!(courses = courses.len(), path = %path.display(), "course catalogue loaded");
    Ok(courses)
}
