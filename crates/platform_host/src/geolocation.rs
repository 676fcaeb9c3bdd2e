//! Visitor location lookup used by the places directory distance sort.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`GeolocationService`].
pub type GeolocationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// WGS84 coordinate in decimal degrees.
pub struct GeoPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// Host service resolving the visitor's current position.
pub trait GeolocationService {
    /// Requests the current position once.
    fn current_position(&self) -> GeolocationFuture<'_, Result<GeoPoint, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Geolocation that always fails; used on native targets.
pub struct UnavailableGeolocationService;

impl GeolocationService for UnavailableGeolocationService {
    fn current_position(&self) -> GeolocationFuture<'_, Result<GeoPoint, String>> {
        Box::pin(async { Err("geolocation unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Copy)]
/// Geolocation answering with a fixed point.
pub struct StaticGeolocationService(pub GeoPoint);

impl GeolocationService for StaticGeolocationService {
    fn current_position(&self) -> GeolocationFuture<'_, Result<GeoPoint, String>> {
        let point = self.0;
        Box::pin(async move { Ok(point) })
    }
}
