use crate::error::{ClimateError, Result};
use crate::models::{kelvin_to_fahrenheit, millis_to_seconds, Observation};
use crate::utils::constants::{
    FIELD_CLOUD_COVER, FIELD_COUNT, FIELD_DELIMITER, FIELD_HUMIDITY, FIELD_LIGHTNING, FIELD_SNOW,
    FIELD_STATE, FIELD_SURFACE_TEMP, FIELD_TIMESTAMP,
};

/// Parse one tab-delimited record into an [`Observation`].
///
/// Fields after the ninth are ignored. Any line that cannot yield all nine
/// fields with valid numbers is reported as [`ClimateError::MalformedRecord`].
///
/// # Examples
/// ```
/// use tdv_climate::readers::parse_line;
///
/// let line = "CA\t1428300000000\t9prcjqk3yc80\t93.0\t0.0\t100.0\t0.0\t95644.0\t277.58716";
/// let observation = parse_line(line).unwrap();
/// assert_eq!(observation.state_code, "CA");
/// assert_eq!(observation.timestamp, 1428300000);
/// ```
pub fn parse_line(line: &str) -> Result<Observation> {
    let line = line.trim_end_matches(['\n', '\r']);

    let mut fields = [""; FIELD_COUNT];
    let mut found = 0;
    for (slot, field) in fields.iter_mut().zip(line.split(FIELD_DELIMITER)) {
        *slot = field.trim();
        found += 1;
    }

    if found < FIELD_COUNT {
        return Err(ClimateError::malformed(format!(
            "expected {} tab-separated fields, found {}",
            FIELD_COUNT, found
        )));
    }

    let state_code = fields[FIELD_STATE];
    if state_code.is_empty() {
        return Err(ClimateError::malformed("empty state code"));
    }

    let timestamp_ms = fields[FIELD_TIMESTAMP].parse::<i64>().map_err(|_| {
        ClimateError::malformed(format!("invalid timestamp: '{}'", fields[FIELD_TIMESTAMP]))
    })?;

    let humidity_pct = parse_number(fields[FIELD_HUMIDITY], "humidity")?;
    let has_snow = parse_flag(fields[FIELD_SNOW], "snow")?;
    let cloud_cover_pct = parse_number(fields[FIELD_CLOUD_COVER], "cloud cover")?;
    let has_lightning = parse_flag(fields[FIELD_LIGHTNING], "lightning")?;
    let surface_temp_kelvin = parse_number(fields[FIELD_SURFACE_TEMP], "surface temperature")?;

    Ok(Observation::new(
        state_code,
        millis_to_seconds(timestamp_ms),
        humidity_pct,
        has_snow,
        cloud_cover_pct,
        has_lightning,
        kelvin_to_fahrenheit(surface_temp_kelvin),
    ))
}

fn parse_number(field: &str, name: &str) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ClimateError::malformed(format!(
            "invalid {}: '{}'",
            name, field
        ))),
    }
}

/// Flags arrive as `0`/`1` or `0.0`/`1.0`; anything nonzero counts as set
fn parse_flag(field: &str, name: &str) -> Result<bool> {
    parse_number(field, name).map(|value| value != 0.0)
}
