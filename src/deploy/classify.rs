// ABOUTME: Maps an HTTP status code and body to exactly one Outcome.
// ABOUTME: Pure and total: malformed bodies degrade to Outcome::Unexpected.

use super::outcome::Outcome;
use super::response::ErrorBody;

/// Classify a deployment response.
///
/// | status  | outcome             | message                                  |
/// |---------|---------------------|------------------------------------------|
/// | 201     | `Success`           | -                                        |
/// | 202     | `RetryableConflict` | `message` field of the error body        |
/// | 401     | `Unauthorized`      | fixed                                    |
/// | 404     | `NotFound`          | fixed                                    |
/// | 419     | `VersionConflict`   | `"Error: "` + `message` field            |
/// | other   | `Unexpected`        | status code and raw body                 |
///
/// When 202 or 419 carry a body that is not `{"message": "..."}`, the result
/// is `Unexpected` with the JSON decoder's error text as its message.
pub fn classify(status: u16, body: &[u8]) -> Outcome {
    match status {
        201 => Outcome::Success,
        202 => match ErrorBody::parse(body) {
            Ok(err) => Outcome::RetryableConflict(err.message),
            Err(e) => Outcome::Unexpected(e.to_string()),
        },
        401 => Outcome::Unauthorized,
        404 => Outcome::NotFound,
        419 => match ErrorBody::parse(body) {
            Ok(err) => Outcome::VersionConflict(format!("Error: {}", err.message)),
            Err(e) => Outcome::Unexpected(e.to_string()),
        },
        _ => Outcome::Unexpected(format!(
            "Unexpected error. Status code: {status}\nBody:\n{}",
            String::from_utf8_lossy(body)
        )),
    }
}
