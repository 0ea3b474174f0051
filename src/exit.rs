// ABOUTME: Process exit codes surfaced to calling automation.
// ABOUTME: Values are fixed so CI pipelines can branch on them.

/// Deployment created.
pub const SUCCESS: i32 = 0;

/// Invalid arguments or configuration (missing ref/owner/repo/token, bad payload).
pub const INVALID_ARGS: i32 = 1;

/// Server auto-merged the base branch first; try again later.
pub const RETRYABLE_CONFLICT: i32 = 2;

/// Credential rejected.
pub const UNAUTHORIZED: i32 = 3;

/// Owner/repo (or endpoint) does not exist.
pub const NOT_FOUND: i32 = 4;

/// Merge conflict between base and target ref.
pub const VERSION_CONFLICT: i32 = 5;

/// Any other status code, or an error body that could not be decoded.
pub const UNEXPECTED: i32 = 10;

/// Request never produced an HTTP response (DNS, refused connection, TLS).
pub const TRANSPORT_FAILURE: i32 = 11;
