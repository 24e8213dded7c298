use anyhow::{anyhow, Result};
use chrono_tz::Tz;

/// Undoes form-decoding of `+` inside a timezone identifier.
///
/// A literal `+` in a query string decodes to a space, which mangles
/// fixed-offset zones like `Etc/GMT+5`. Restoring the `+` before lookup
/// recovers what the client actually sent.
pub fn normalize_timezone(timezone: &str) -> String {
    timezone.replace(' ', "+")
}

/// Looks up a timezone identifier in the embedded IANA database.
pub fn validate_timezone(timezone: &str) -> Result<Tz> {
    timezone.parse::<Tz>().map_err(|_| {
        anyhow!(
            "Unrecognized timezone '{}'. A valid IANA timezone identifier is required",
            timezone
        )
    })
}
