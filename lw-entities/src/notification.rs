use std::num::NonZeroU32;

use strum::{Display, EnumString};
use time::{Date, Duration};

use crate::geo::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NoticeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceNotice {
    pub amount: NonZeroU32,
    pub unit: NoticeUnit,
}

impl AdvanceNotice {
    pub fn to_duration(self) -> Duration {
        let amount = i64::from(self.amount.get());
        match self.unit {
            NoticeUnit::Minutes => Duration::minutes(amount),
            NoticeUnit::Hours => Duration::hours(amount),
            NoticeUnit::Days => Duration::days(amount),
            NoticeUnit::Weeks => Duration::weeks(amount),
        }
    }
}

impl Default for AdvanceNotice {
    fn default() -> Self {
        Self {
            amount: NonZeroU32::MIN,
            unit: NoticeUnit::Hours,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PhoneType {
    #[default]
    #[strum(to_string = "cell", serialize = "cell phone")]
    Cell,
    #[strum(to_string = "satellite", serialize = "sat phone")]
    Satellite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Provider {
    #[strum(to_string = "Verizon")]
    Verizon,
    #[strum(to_string = "AT&T", serialize = "att")]
    Att,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisplayMode {
    #[default]
    Vegetation,
    Thermal,
}

/// Everything the user configures in the notification popup.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    pub point: GeoPoint,
    pub advance_notice: AdvanceNotice,
    pub phone_type: PhoneType,
    /// `None` until the user picked one.
    pub provider: Option<Provider>,
    pub phone_number: String,
    pub show_history: bool,
    pub history_anchor_date: Option<Date>,
    pub display_mode: DisplayMode,
}

impl NotificationConfig {
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            advance_notice: AdvanceNotice::default(),
            phone_type: PhoneType::default(),
            provider: None,
            phone_number: String::new(),
            show_history: false,
            history_anchor_date: None,
            display_mode: DisplayMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_units_and_options() {
        assert_eq!("days".parse::<NoticeUnit>().unwrap(), NoticeUnit::Days);
        assert_eq!("Weeks".parse::<NoticeUnit>().unwrap(), NoticeUnit::Weeks);
        assert!("fortnights".parse::<NoticeUnit>().is_err());
        assert_eq!("SAT Phone".parse::<PhoneType>().unwrap(), PhoneType::Satellite);
        assert_eq!("Cell Phone".parse::<PhoneType>().unwrap(), PhoneType::Cell);
        assert_eq!("AT&T".parse::<Provider>().unwrap(), Provider::Att);
        assert_eq!("Verizon".parse::<Provider>().unwrap(), Provider::Verizon);
        assert_eq!("thermal".parse::<DisplayMode>().unwrap(), DisplayMode::Thermal);
        assert_eq!(NoticeUnit::Minutes.to_string(), "minutes");
    }

    #[test]
    fn advance_notice_duration() {
        let notice = AdvanceNotice {
            amount: NonZeroU32::new(2).unwrap(),
            unit: NoticeUnit::Weeks,
        };
        assert_eq!(notice.to_duration(), Duration::days(14));
        assert_eq!(AdvanceNotice::default().to_duration(), Duration::hours(1));
    }

    #[test]
    fn defaults() {
        let point = GeoPoint::try_from_lat_lng_deg(45.0, -63.5).unwrap();
        let cfg = NotificationConfig::new(point);
        assert_eq!(cfg.point, point);
        assert_eq!(cfg.advance_notice.unit, NoticeUnit::Hours);
        assert_eq!(cfg.phone_type, PhoneType::Cell);
        assert!(cfg.provider.is_none());
        assert!(!cfg.show_history);
        assert_eq!(cfg.display_mode, DisplayMode::Vegetation);
    }
}
