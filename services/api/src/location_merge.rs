//! Merged view over standalone locations and collector profile locations
//!
//! Both sources are projected into [`DropOffPoint`] before they are joined,
//! so the listing never depends on either source's storage shape.

use chrono::{DateTime, Utc};
use common::filter::normalize_district;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{
    location::{Location, STATUS_ACTIVE},
    user::{CollectorProfileLocation, User},
};

/// Where a drop-off point came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointSource {
    Location,
    Collector,
}

/// Read model served by `GET /api/locations`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropOffPoint {
    pub id: Uuid,
    pub name: String,
    pub district: String,
    pub address: String,
    pub description: String,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub images: Vec<String>,
    pub collector_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub source: PointSource,
}

impl From<Location> for DropOffPoint {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            district: location.district,
            address: location.address,
            description: location.description,
            start_date: location.start_date,
            start_time: location.start_time,
            end_date: location.end_date,
            end_time: location.end_time,
            images: location.images,
            collector_id: location.collector_id,
            status: location.status,
            created_at: location.created_at,
            source: PointSource::Location,
        }
    }
}

/// Stable id for an embedded entry
///
/// Entries saved without an id fall back to a UUIDv5 of their position
/// under the owning user, which stays put as long as the sequence does.
pub fn embedded_location_id(user_id: Uuid, index: usize, entry: &CollectorProfileLocation) -> Uuid {
    entry
        .id
        .unwrap_or_else(|| Uuid::new_v5(&user_id, index.to_string().as_bytes()))
}

fn project_collector_location(
    user: &User,
    index: usize,
    entry: &CollectorProfileLocation,
    now: DateTime<Utc>,
) -> DropOffPoint {
    let description = match user.occupation.as_deref() {
        Some(occupation) => format!("Collection point managed by {} ({})", user.name, occupation),
        None => format!("Collection point managed by {}", user.name),
    };

    DropOffPoint {
        id: embedded_location_id(user.id, index, entry),
        name: format!("{} - {}", user.name, entry.district),
        district: entry.district.clone(),
        address: entry.address.clone(),
        description,
        start_date: entry.start_date.clone(),
        start_time: entry.start_time.clone(),
        end_date: entry.end_date.clone(),
        end_time: entry.end_time.clone(),
        images: entry.images.clone(),
        collector_id: Some(user.id),
        status: STATUS_ACTIVE.to_string(),
        created_at: entry.created_at.unwrap_or(now),
        source: PointSource::Collector,
    }
}

/// Join both sources: standalone locations first, in the order given, then
/// every matching collector entry in collector order
///
/// `district` must already be canonical. The two groups are not re-sorted
/// against each other.
pub fn merge_drop_off_points(
    standalone: Vec<Location>,
    collectors: &[User],
    district: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<DropOffPoint> {
    let mut points: Vec<DropOffPoint> = standalone.into_iter().map(DropOffPoint::from).collect();

    for user in collectors.iter().filter(|user| user.is_collector()) {
        for (index, entry) in user.locations.iter().enumerate() {
            let matches = district
                .map(|district| normalize_district(&entry.district) == district)
                .unwrap_or(true);
            if matches {
                points.push(project_collector_location(user, index, entry, now));
            }
        }
    }

    points
}
