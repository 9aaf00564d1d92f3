//! Turning a status code and body into a result.

use catalog::{ActionFailure, ActionReply, Catalog, ClientError, DecodeError};

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// A non-2xx response. The `detail` is kept only when the body has a non-empty
/// string one.
fn rejected(status: u16, body: &str) -> ClientError {
    let detail = serde_json::from_str::<ActionFailure>(body)
        .ok()
        .and_then(|failure| failure.detail)
        .filter(|detail| !detail.is_empty());
    ClientError::Rejected { status, detail }
}

pub(crate) fn catalog_from(status: u16, body: &str) -> Result<Catalog, ClientError> {
    if !is_success(status) {
        return Err(rejected(status, body));
    }
    Ok(Catalog::from_json(body)?)
}

pub(crate) fn message_from(status: u16, body: &str) -> Result<String, ClientError> {
    if !is_success(status) {
        return Err(rejected(status, body));
    }
    let reply: ActionReply = serde_json::from_str(body).map_err(DecodeError::from)?;
    Ok(reply.message)
}
