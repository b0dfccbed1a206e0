// Tue Jan 13 2026 - Alex

pub mod options;

pub use options::{Set, Size};

use crate::config::DEFAULT_ENDPOINT_URL;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A bounding-box query into the photo catalog. Bounds are decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Query {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub size: Size,
    pub set: Set,
    pub map_filter: bool,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Box around `lat`, `lon` whose corners lie `radius_km` from the center.
    ///
    /// Uses a flat-earth approximation, so it is only meaningful for small radii
    /// away from the poles.
    pub fn radius(lat: f64, lon: f64, radius_km: f64) -> Self {
        let x = radius_km / (EARTH_RADIUS_KM * SQRT_2);

        let d_lat = x.abs().to_degrees();
        let d_lon = (x / lat.to_radians().cos()).abs().to_degrees();

        Self {
            min_lat: lat - d_lat,
            max_lat: lat + d_lat,
            min_lon: lon - d_lon,
            max_lon: lon + d_lon,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        self.min_lat = min_lat;
        self.min_lon = min_lon;
        self.max_lat = max_lat;
        self.max_lon = max_lon;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_set(mut self, set: Set) -> Self {
        self.set = set;
        self
    }

    pub fn with_map_filter(mut self, map_filter: bool) -> Self {
        self.map_filter = map_filter;
        self
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    // Sorted by key so rendered URLs are stable.
    fn params(&self) -> [(&'static str, String); 7] {
        [
            ("mapfilter", self.map_filter.to_string()),
            ("maxx", self.max_lon.to_string()),
            ("maxy", self.max_lat.to_string()),
            ("minx", self.min_lon.to_string()),
            ("miny", self.min_lat.to_string()),
            ("set", self.set.as_str().to_string()),
            ("size", self.size.as_str().to_string()),
        ]
    }

    /// URL of the default catalog endpoint that performs this query.
    pub fn url(&self) -> String {
        self.url_at(&DEFAULT_ENDPOINT_URL)
    }

    /// Appends the query parameters to `endpoint`, keeping any it already has.
    /// A fragment is dropped since ranges are appended after the query.
    pub fn url_at(&self, endpoint: &Url) -> String {
        let mut url = endpoint.clone();
        url.set_fragment(None);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.params() {
                pairs.append_pair(key, &value);
            }
        }
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn approx_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let d_lat = (lat2 - lat1).to_radians();
        let d_lon = (lon2 - lon1).to_radians();
        let x = d_lon * lat1.to_radians().cos();
        EARTH_RADIUS_KM * (x * x + d_lat * d_lat).sqrt()
    }

    #[test]
    fn test_radius_corners_within_bound() {
        let (lat, lon, radius) = (45.0, 0.0, 10.0);
        let query = Query::radius(lat, lon, radius);

        let d_min = approx_distance_km(lat, lon, query.min_lat, query.min_lon);
        let d_max = approx_distance_km(lat, lon, query.max_lat, query.max_lon);

        assert!(d_min <= radius * SQRT_2, "min corner at {} km", d_min);
        assert!(d_max <= radius * SQRT_2, "max corner at {} km", d_max);
        assert!((d_min - radius).abs() < 1e-6);
    }

    #[test]
    fn test_radius_is_centered() {
        let query = Query::radius(37.77, -122.42, 2.5);
        let (lat, lon) = query.center();

        assert!((lat - 37.77).abs() < 1e-9);
        assert!((lon + 122.42).abs() < 1e-9);
        assert!(query.max_lon - query.min_lon > query.max_lat - query.min_lat);
    }

    #[test]
    fn test_default_url() {
        let url = Url::parse(&Query::default().url()).unwrap();

        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("www.panoramio.com"));
        assert_eq!(url.path(), "/map/get_panoramas.php");

        let params: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(params["set"], "full");
        assert_eq!(params["size"], "original");
        assert_eq!(params["minx"], "0");
        assert_eq!(params["miny"], "0");
        assert_eq!(params["maxx"], "0");
        assert_eq!(params["maxy"], "0");
        assert_eq!(params["mapfilter"], "false");
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn test_url_renders_fields() {
        let query = Query::new()
            .with_bounds(-33.5, 151.25, -33.25, 151.5)
            .with_size(Size::MiniSquare)
            .with_set(Set::Public)
            .with_map_filter(true);

        let url = Url::parse(&query.url()).unwrap();
        assert_eq!(
            url.query(),
            Some("mapfilter=true&maxx=151.5&maxy=-33.25&minx=151.25&miny=-33.5&set=public&size=mini_square")
        );
    }

    #[test]
    fn test_url_at_custom_endpoint() {
        let query = Query::default();
        let endpoint = |s: &str| Url::parse(s).unwrap();

        assert!(query
            .url_at(&endpoint("http://127.0.0.1:8080/panoramas"))
            .starts_with("http://127.0.0.1:8080/panoramas?mapfilter=false&"));
        assert!(query
            .url_at(&endpoint("http://127.0.0.1:8080/panoramas?key=abc"))
            .starts_with("http://127.0.0.1:8080/panoramas?key=abc&mapfilter=false&"));
    }

    #[test]
    fn test_url_at_drops_fragment() {
        let endpoint = Url::parse("http://127.0.0.1:8080/panoramas?key=a%26b#top").unwrap();
        let rendered = Query::default().url_at(&endpoint);

        assert!(!rendered.contains('#'));
        assert!(rendered.ends_with("&size=original"));

        let params: HashMap<_, _> = Url::parse(&rendered).unwrap().query_pairs().into_owned().collect();
        assert_eq!(params["key"], "a&b");
        assert_eq!(params["set"], "full");
    }
}
