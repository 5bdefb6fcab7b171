//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Airport, Frequency, Runway, RunwayGeometry};

/// Query for the station lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct StationLookupRequest {
    /// Airport identifier, any case
    pub icao: Option<String>,
}

/// Query for the URL relay endpoint.
#[derive(Debug, Deserialize)]
pub struct ProxyRequest {
    pub url: Option<String>,
}

/// Query for the forecast relay endpoint.
#[derive(Debug, Deserialize)]
pub struct WeatherProxyRequest {
    pub lat: Option<String>,
    pub lon: Option<String>,
    /// Comma-separated hourly variables (e.g. `wind_speed_10m,wind_direction_10m`)
    pub vars: Option<String>,
}

/// A resolved station.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    /// Dataset row id
    pub id: Option<String>,

    pub icao: String,

    pub name: String,

    pub lat: f64,

    pub lon: f64,

    pub elev_ft: i64,

    /// Always derived from `elev_ft`
    pub elev_m: i64,

    pub runways: Vec<RunwayResult>,

    pub freqs: Vec<FrequencyResult>,
}

impl StationResponse {
    /// Convert a resolved airport for the wire.
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            id: airport.id.clone(),
            icao: airport.icao.clone(),
            name: airport.name.clone(),
            lat: airport.lat,
            lon: airport.lon,
            elev_ft: airport.elevation_ft,
            elev_m: airport.elevation_m(),
            runways: airport.runways.iter().map(RunwayResult::from_runway).collect(),
            freqs: airport
                .freqs
                .iter()
                .map(FrequencyResult::from_frequency)
                .collect(),
        }
    }
}

/// A runway in a station response.
#[derive(Debug, Serialize)]
pub struct RunwayResult {
    /// Low end designator
    pub ident1: String,

    /// High end designator
    pub ident2: String,

    pub length_ft: i64,

    pub width_ft: i64,

    pub heading1: f64,

    pub heading2: f64,

    /// Threshold coordinates, `null` when not surveyed
    pub geometry: Option<GeometryResult>,
}

impl RunwayResult {
    pub fn from_runway(runway: &Runway) -> Self {
        Self {
            ident1: runway.ident1.clone(),
            ident2: runway.ident2.clone(),
            length_ft: runway.length_ft,
            width_ft: runway.width_ft,
            heading1: runway.heading1,
            heading2: runway.heading2,
            geometry: runway.geometry.as_ref().map(GeometryResult::from_geometry),
        }
    }
}

/// Runway threshold coordinates.
#[derive(Debug, Serialize)]
pub struct GeometryResult {
    pub le_lat: f64,
    pub le_lon: f64,
    pub he_lat: f64,
    pub he_lon: f64,
}

impl GeometryResult {
    pub fn from_geometry(geometry: &RunwayGeometry) -> Self {
        Self {
            le_lat: geometry.le_lat,
            le_lon: geometry.le_lon,
            he_lat: geometry.he_lat,
            he_lon: geometry.he_lon,
        }
    }
}

/// A frequency in a station response.
#[derive(Debug, Serialize)]
pub struct FrequencyResult {
    #[serde(rename = "type")]
    pub kind: String,

    pub desc: String,

    pub mhz: String,
}

impl FrequencyResult {
    pub fn from_frequency(freq: &Frequency) -> Self {
        Self {
            kind: freq.kind.clone(),
            desc: freq.description.clone(),
            mhz: freq.mhz.clone(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned when the forecast upstream could not be reached.
#[derive(Debug, Serialize)]
pub struct ForecastFailureResponse {
    pub error: String,
    pub details: String,
    pub url_attempted: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jfk() -> Airport {
        Airport {
            id: Some("3622".into()),
            icao: "KJFK".into(),
            name: "John F Kennedy International Airport".into(),
            lat: 40.6398,
            lon: -73.7789,
            elevation_ft: 13,
            runways: vec![],
            freqs: vec![],
        }
    }

    #[test]
    fn bare_station_shape() {
        let value = serde_json::to_value(StationResponse::from_airport(&jfk())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "3622",
                "icao": "KJFK",
                "name": "John F Kennedy International Airport",
                "lat": 40.6398,
                "lon": -73.7789,
                "elev_ft": 13,
                "elev_m": 4,
                "runways": [],
                "freqs": []
            })
        );
    }

    #[test]
    fn runway_and_frequency_shape() {
        let mut airport = jfk();
        airport.runways.push(Runway {
            ident1: "04L".into(),
            ident2: "22R".into(),
            length_ft: 12000,
            width_ft: 200,
            heading1: 40.0,
            heading2: 220.0,
            geometry: None,
        });
        airport.runways.push(Runway {
            ident1: "13R".into(),
            ident2: "31L".into(),
            length_ft: 14511,
            width_ft: 150,
            heading1: 121.0,
            heading2: 301.0,
            geometry: Some(RunwayGeometry {
                le_lat: 40.6483,
                le_lon: -73.816,
                he_lat: 40.6281,
                he_lon: -73.77,
            }),
        });
        airport.freqs.push(Frequency {
            kind: "TWR".into(),
            description: "KENNEDY TWR".into(),
            mhz: "119.1".into(),
        });

        let value = serde_json::to_value(StationResponse::from_airport(&airport)).unwrap();
        assert_eq!(
            value["runways"][0],
            json!({
                "ident1": "04L",
                "ident2": "22R",
                "length_ft": 12000,
                "width_ft": 200,
                "heading1": 40.0,
                "heading2": 220.0,
                "geometry": null
            })
        );
        assert_eq!(
            value["runways"][1]["geometry"],
            json!({"le_lat": 40.6483, "le_lon": -73.816, "he_lat": 40.6281, "he_lon": -73.77})
        );
        assert_eq!(
            value["freqs"],
            json!([{"type": "TWR", "desc": "KENNEDY TWR", "mhz": "119.1"}])
        );
    }

    #[test]
    fn missing_id_is_null() {
        let mut airport = jfk();
        airport.id = None;
        let value = serde_json::to_value(StationResponse::from_airport(&airport)).unwrap();
        assert!(value["id"].is_null());
    }
}
