//! Page/limit arithmetic shared by the list endpoints.

pub const MAX_LIMIT: i64 = 100;

/// Normalizes a 1-based page and page size into `(limit, offset)` query
/// bounds. Saturates instead of overflowing, so absurd page numbers from the
/// query string yield an empty page rather than a panic or a negative OFFSET.
pub fn limit_offset(page: i64, limit: i64) -> (i64, i64) {
    let limit = limit.clamp(1, MAX_LIMIT);
    let offset = page.max(1).saturating_sub(1).saturating_mul(limit);
    (limit, offset)
}
