use strum_macros::Display;

/// Minimum number of positional fields a state vector must carry; shorter
/// rows lack the mandatory identity and ground-status fields and are
/// rejected rather than defaulted.
const MIN_STATE_FIELDS: usize = 17;

/// Decoded state vector of a single aircraft at a point in time.
///
/// The upstream encodes a row as a positional array of heterogeneous values
/// (strings, numbers, booleans and nulls mixed freely); [`Self::from_state_vector`]
/// maps it into the strongly typed form. Serialized field names match the
/// documented OpenSky schema.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct FlightState {
    pub icao24: String,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    pub time_position: Option<i64>,
    pub last_contact: i64,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub baro_altitude: Option<f64>,
    pub on_ground: bool,
    pub velocity: Option<f64>,
    pub true_track: Option<f64>,
    pub vertical_rate: Option<f64>,
    pub geo_altitude: Option<f64>,
    pub squawk: Option<String>,
    pub spi: bool,
    pub position_source: i64,
    pub category: Option<i64>,
}

impl FlightState {
    /// Decodes one raw state vector.
    ///
    /// Structural requirements: the value must be an array of at least
    /// [`MIN_STATE_FIELDS`] elements. Beyond that every field converts
    /// independently; a value that fails its conversion becomes `None` (or
    /// the field's default) without voiding the rest of the row. Fields at
    /// indices past the guaranteed length (13 and up) are read only when
    /// present. Index 12 is a gap in the upstream schema and skipped.
    pub fn from_state_vector(value: &serde_json::Value) -> Result<Self, DecodeError> {
        let row = value.as_array().ok_or(DecodeError::NotAnArray)?;
        if row.len() < MIN_STATE_FIELDS {
            return Err(DecodeError::TooShort {
                found: row.len(),
                expected: MIN_STATE_FIELDS,
            });
        }
        let row = RawStateVector(row);
        Ok(Self {
            icao24: row.string(0).unwrap_or_default(),
            callsign: row.string(1).map(|c| c.trim().to_string()),
            origin_country: row.string(2),
            time_position: row.integer(3),
            last_contact: row.integer(4).unwrap_or(0),
            longitude: row.float(5),
            latitude: row.float(6),
            baro_altitude: row.float(7),
            on_ground: row.boolean(8),
            velocity: row.float(9),
            true_track: row.float(10),
            vertical_rate: row.float(11),
            geo_altitude: row.float(13),
            squawk: row.string(14),
            spi: row.boolean(15),
            position_source: row.integer(16).unwrap_or(0),
            category: row.integer(17),
        })
    }
}

/// Accessor layer over one raw row. Every accessor stringifies the wire
/// value first and then parses the target type from that string, so a
/// numeric squawk or a stringified altitude decode the same way they would
/// have arrived natively. Out-of-range indices and nulls read as `None`.
struct RawStateVector<'a>(&'a [serde_json::Value]);

impl RawStateVector<'_> {
    fn string(&self, index: usize) -> Option<String> {
        match self.0.get(index)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            value => Some(value.to_string()),
        }
    }

    fn integer(&self, index: usize) -> Option<i64> {
        self.string(index)?.parse().ok()
    }

    fn float(&self, index: usize) -> Option<f64> {
        self.string(index)?.parse().ok()
    }

    /// True only for the exact literal `true`; anything else, including
    /// null or an absent field, reads as false.
    fn boolean(&self, index: usize) -> bool {
        self.string(index).as_deref() == Some("true")
    }
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum DecodeError {
    #[strum(to_string = "state vector is not an array")]
    NotAnArray,
    #[strum(to_string = "state vector has {found} fields, expected at least {expected}")]
    TooShort { found: usize, expected: usize },
}

impl std::error::Error for DecodeError {}
