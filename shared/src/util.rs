/// Current UTC wall-clock time in Unix milliseconds.
///
/// All absolute timestamps in the order/payment models (payment expiry,
/// creation times) are Unix millis, so this is the single clock read point.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
