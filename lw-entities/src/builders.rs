pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{notification_config_builder::*, pass_prediction_builder::*};

pub mod notification_config_builder {

    use super::*;
    use crate::{geo::*, notification::*};
    use std::num::NonZeroU32;
    use time::Date;

    #[derive(Debug)]
    pub struct NotificationConfigBuild {
        config: NotificationConfig,
    }

    impl NotificationConfigBuild {
        pub fn point(mut self, lat: f64, lng: f64) -> Self {
            self.config.point = GeoPoint::try_from_lat_lng_deg(lat, lng).unwrap();
            self
        }
        pub fn advance_notice(mut self, amount: u32, unit: NoticeUnit) -> Self {
            self.config.advance_notice = AdvanceNotice {
                amount: NonZeroU32::new(amount).unwrap(),
                unit,
            };
            self
        }
        pub fn phone_type(mut self, phone_type: PhoneType) -> Self {
            self.config.phone_type = phone_type;
            self
        }
        pub fn provider(mut self, provider: Provider) -> Self {
            self.config.provider = Some(provider);
            self
        }
        pub fn phone_number(mut self, phone_number: &str) -> Self {
            self.config.phone_number = phone_number.into();
            self
        }
        pub fn history_since(mut self, anchor: Date) -> Self {
            self.config.show_history = true;
            self.config.history_anchor_date = Some(anchor);
            self
        }
        pub fn display_mode(mut self, display_mode: DisplayMode) -> Self {
            self.config.display_mode = display_mode;
            self
        }
        pub fn finish(self) -> NotificationConfig {
            self.config
        }
    }

    impl Builder for NotificationConfig {
        type Build = NotificationConfigBuild;
        fn build() -> Self::Build {
            let origin = GeoPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap();
            Self::Build {
                config: NotificationConfig::new(origin),
            }
        }
    }
}

pub mod pass_prediction_builder {

    use super::*;
    use crate::pass::*;
    use time::{macros::datetime, OffsetDateTime};

    #[derive(Debug)]
    pub struct PassPredictionBuild {
        prediction: PassPrediction,
    }

    impl PassPredictionBuild {
        pub fn path_row(mut self, path: u16, row: u16) -> Self {
            self.prediction.path = path;
            self.prediction.row = row;
            self
        }
        pub fn landsat_8(mut self, ts: OffsetDateTime) -> Self {
            self.prediction.soonest_landsat_8 = ts;
            self
        }
        pub fn landsat_9(mut self, ts: OffsetDateTime) -> Self {
            self.prediction.soonest_landsat_9 = ts;
            self
        }
        pub fn finish(self) -> PassPrediction {
            self.prediction
        }
    }

    impl Builder for PassPrediction {
        type Build = PassPredictionBuild;
        fn build() -> Self::Build {
            Self::Build {
                prediction: PassPrediction {
                    path: 10,
                    row: 33,
                    soonest_landsat_8: datetime!(2024-10-05 14:32:00 UTC),
                    soonest_landsat_9: datetime!(2024-10-13 14:32:00 UTC),
                },
            }
        }
    }
}
