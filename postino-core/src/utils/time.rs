use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Istante corrente in UTC formattato come RFC3339 (es. "2025-11-02T12:34:56.123Z").
/// È il timestamp che lo store assegna ai messaggi al momento dell'inserimento.
pub fn now_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).expect("error formatting timestamp")
}
