use super::*;
use lw_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Coordinate(#[from] e::geo::CoordRangeError),
    #[error(transparent)]
    Bounds(#[from] e::geo::InvalidBoundsError),
    #[error(transparent)]
    Timestamp(#[from] e::date::DateParseError),
}

impl From<e::geo::GeoPoint> for Coordinate {
    fn from(from: e::geo::GeoPoint) -> Self {
        let (latitude, longitude) = from.to_lat_lng_deg();
        Self {
            latitude,
            longitude,
        }
    }
}

impl TryFrom<Coordinate> for e::geo::GeoPoint {
    type Error = ConversionError;

    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate {
            latitude,
            longitude,
        } = from;
        Ok(e::geo::GeoPoint::try_from_lat_lng_deg(latitude, longitude)?)
    }
}

impl TryFrom<LandsatPass> for e::pass::PassPrediction {
    type Error = ConversionError;

    fn try_from(from: LandsatPass) -> Result<Self, Self::Error> {
        let LandsatPass {
            path,
            row,
            soonest_landsat_8,
            soonest_landsat_9,
        } = from;
        Ok(Self {
            path,
            row,
            soonest_landsat_8: e::date::parse_timestamp(&soonest_landsat_8)?,
            soonest_landsat_9: e::date::parse_timestamp(&soonest_landsat_9)?,
        })
    }
}

impl From<e::pass::SceneQuery> for DownloadLandsat {
    fn from(from: e::pass::SceneQuery) -> Self {
        let e::pass::SceneQuery {
            point,
            start,
            end,
            max_cloud_cover,
        } = from;
        let (latitude, longitude) = point.to_lat_lng_deg();
        Self {
            latitude,
            longitude,
            start_date: e::date::format_iso_date(start),
            end_date: e::date::format_iso_date(end),
            max_cloud_cover,
        }
    }
}

impl From<DownloadedScenes> for Vec<e::pass::SceneId> {
    fn from(from: DownloadedScenes) -> Self {
        from.downloaded_scenes.into_iter().map(Into::into).collect()
    }
}

impl TryFrom<OverlayCoordinates> for e::geo::OverlayBounds {
    type Error = ConversionError;

    fn try_from(from: OverlayCoordinates) -> Result<Self, Self::Error> {
        let OverlayCoordinates {
            south,
            west,
            north,
            east,
        } = from;
        Ok(e::geo::OverlayBounds::new(south, west, north, east)?)
    }
}

impl From<e::geo::OverlayBounds> for OverlayCoordinates {
    fn from(from: e::geo::OverlayBounds) -> Self {
        Self {
            south: from.south(),
            west: from.west(),
            north: from.north(),
            east: from.east(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn landsat_pass_into_prediction() {
        let pass = LandsatPass {
            path: 10,
            row: 33,
            soonest_landsat_8: "2024-10-05T10:32:00Z".into(),
            soonest_landsat_9: "2024-10-13 10:32:00".into(),
        };
        let prediction = e::pass::PassPrediction::try_from(pass).unwrap();
        assert_eq!(prediction.soonest_landsat_8, datetime!(2024-10-05 10:32:00 UTC));
        assert_eq!(prediction.soonest_landsat_9, datetime!(2024-10-13 10:32:00 UTC));
    }

    #[test]
    fn scene_query_into_request() {
        let query = e::pass::SceneQuery {
            point: e::geo::GeoPoint::try_from_lat_lng_deg(44.5, -65.5).unwrap(),
            start: time::macros::date!(2022 - 01 - 01),
            end: time::macros::date!(2022 - 12 - 31),
            max_cloud_cover: 10,
        };
        let req = DownloadLandsat::from(query);
        assert_eq!(req.start_date, "2022-01-01");
        assert_eq!(req.end_date, "2022-12-31");
        assert_eq!(req.latitude, 44.5);
        assert_eq!(req.longitude, -65.5);
        assert_eq!(req.max_cloud_cover, 10);
    }

    #[test]
    fn malformed_timestamp() {
        let pass = LandsatPass {
            path: 10,
            row: 33,
            soonest_landsat_8: "soon".into(),
            soonest_landsat_9: "2024-10-13 10:32:00".into(),
        };
        assert!(matches!(
            e::pass::PassPrediction::try_from(pass),
            Err(ConversionError::Timestamp(_))
        ));
    }

    #[test]
    fn invalid_overlay_coordinates() {
        let coords = OverlayCoordinates {
            south: 45.0,
            west: -66.0,
            north: 44.0,
            east: -65.0,
        };
        assert!(matches!(
            e::geo::OverlayBounds::try_from(coords),
            Err(ConversionError::Bounds(_))
        ));
    }
}
