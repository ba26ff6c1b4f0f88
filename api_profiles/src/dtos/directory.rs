use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    pub category: Option<String>,
    pub city: Option<String>,
}
