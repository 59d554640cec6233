//! Diesel schema for audit persistence.

diesel::table! {
    /// Append-only pipeline stage records.
    audit_records (id) {
        /// Surrogate insertion-ordered key.
        id -> Int8,
        /// Time the stage was recorded.
        recorded_at -> Timestamptz,
        /// HTTP method of the request.
        #[max_length = 16]
        method -> Varchar,
        /// Endpoint path of the request.
        #[max_length = 255]
        endpoint -> Varchar,
        /// Raw payload snapshot.
        snapshot -> Jsonb,
        /// Stage-status string.
        status -> Text,
        /// Correlation id of the request.
        correlation_id -> Uuid,
    }
}
