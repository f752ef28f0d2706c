use std::time::{SystemTime, UNIX_EPOCH};

use uuid::{NoContext, Timestamp, Uuid};

/// Time-ordered UUID (v7), or a random v4 if the clock reads before the Unix epoch.
pub fn generate_uuid() -> Uuid {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => Uuid::new_v7(Timestamp::from_unix(
            NoContext,
            elapsed.as_secs(),
            elapsed.subsec_nanos(),
        )),
        Err(err) => {
            tracing::debug!(error = %err, "clock before unix epoch, using uuid v4");
            Uuid::new_v4()
        }
    }
}

/// [`generate_uuid`] as 32 lowercase hex characters without dashes.
pub fn generate_uuid_without_dashes() -> String {
    generate_uuid().simple().to_string()
}
