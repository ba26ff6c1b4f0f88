use serde::Deserialize;
use serde_json::Value;

/// Wizard state as the client last left it. `data` is stored verbatim so
/// reloading the page restores every entered field unchanged.
#[derive(Debug, Deserialize)]
pub struct DraftSaveRequest {
    pub step: i32,
    pub data: Value,
}

/// Final wizard payload. The shape depends on the account role and is
/// validated against every gated step before the profile upsert.
#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    pub data: Value,
}
