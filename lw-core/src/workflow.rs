use std::num::NonZeroU32;

use lw_entities::{date::parse_iso_date, geo::GeoPoint, notification::*};
use time::Date;

use crate::{revisit, Error, Result};

/// A single change of the notification popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    AdvanceNoticeAmount(NonZeroU32),
    AdvanceNoticeUnit(NoticeUnit),
    PhoneType(PhoneType),
    Provider(Option<Provider>),
    PhoneNumber(String),
    ShowHistory(bool),
    HistoryAnchorDate(Option<Date>),
    DisplayMode(DisplayMode),
}

impl FieldUpdate {
    /// Interprets the raw `name` and `value` of a popup input element.
    pub fn parse(name: &str, value: &str) -> Result<Self> {
        let invalid = || Error::InvalidField {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let trimmed = value.trim();
        let update = match name {
            "advanceNoticeAmount" | "advanceNoticeNumber" => Self::AdvanceNoticeAmount(
                trimmed.parse::<NonZeroU32>().map_err(|_| invalid())?,
            ),
            "advanceNoticeUnit" => {
                Self::AdvanceNoticeUnit(trimmed.parse().map_err(|_| invalid())?)
            }
            "phoneType" => Self::PhoneType(trimmed.parse().map_err(|_| invalid())?),
            "provider" => {
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("select provider") {
                    Self::Provider(None)
                } else {
                    Self::Provider(Some(trimmed.parse().map_err(|_| invalid())?))
                }
            }
            "phoneNumber" => Self::PhoneNumber(trimmed.to_owned()),
            "showHistory" => Self::ShowHistory(parse_flag(trimmed).ok_or_else(invalid)?),
            "historyAnchorDate" | "selectedDate" => {
                if trimmed.is_empty() {
                    Self::HistoryAnchorDate(None)
                } else {
                    Self::HistoryAnchorDate(Some(parse_iso_date(trimmed)?))
                }
            }
            "displayMode" | "mode" => Self::DisplayMode(trimmed.parse().map_err(|_| invalid())?),
            _ => return Err(Error::UnknownField(name.to_owned())),
        };
        Ok(update)
    }

    fn apply(self, config: &mut NotificationConfig) {
        match self {
            Self::AdvanceNoticeAmount(amount) => config.advance_notice.amount = amount,
            Self::AdvanceNoticeUnit(unit) => config.advance_notice.unit = unit,
            Self::PhoneType(phone_type) => config.phone_type = phone_type,
            Self::Provider(provider) => config.provider = provider,
            Self::PhoneNumber(number) => config.phone_number = number,
            Self::ShowHistory(show) => config.show_history = show,
            Self::HistoryAnchorDate(date) => config.history_anchor_date = date,
            Self::DisplayMode(mode) => config.display_mode = mode,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// A finalized configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    config: NotificationConfig,
    history: Option<Vec<Date>>,
}

impl Submission {
    pub const fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// `None` if the user did not ask for historical data.
    pub fn history(&self) -> Option<&[Date]> {
        self.history.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkflowState {
    #[default]
    Idle,
    Editing(NotificationConfig),
    Submitted(Submission),
}

impl WorkflowState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Editing(_) => "editing",
            Self::Submitted(_) => "submitted",
        }
    }
}

/// Drives the notification popup.
#[derive(Debug, Default)]
pub struct NotificationWorkflow {
    state: WorkflowState,
}

impl NotificationWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub const fn draft(&self) -> Option<&NotificationConfig> {
        match &self.state {
            WorkflowState::Editing(config) => Some(config),
            _ => None,
        }
    }

    pub const fn submission(&self) -> Option<&Submission> {
        match &self.state {
            WorkflowState::Submitted(submission) => Some(submission),
            _ => None,
        }
    }

    /// Opens the popup for `point`.
    ///
    /// An open popup keeps its inputs and only moves to the new point.
    pub fn open_at(&mut self, point: GeoPoint) {
        match &mut self.state {
            WorkflowState::Editing(config) => {
                config.point = point;
            }
            state => {
                log::debug!("Open notification popup at {point}");
                *state = WorkflowState::Editing(NotificationConfig::new(point));
            }
        }
    }

    /// Lets an open popup follow the selected point.
    pub fn move_draft_to(&mut self, point: GeoPoint) -> bool {
        match &mut self.state {
            WorkflowState::Editing(config) => {
                config.point = point;
                true
            }
            _ => false,
        }
    }

    pub fn update_field(&mut self, update: FieldUpdate) -> Result<()> {
        let WorkflowState::Editing(config) = &mut self.state else {
            return Err(Error::InvalidTransition {
                action: "update a field",
                state: self.state.name(),
            });
        };
        update.apply(config);
        Ok(())
    }

    /// Finalizes the configuration.
    ///
    /// The historical dates are computed now and not while editing.
    pub fn submit(&mut self, today: Date, cycle_days: i64) -> Result<Submission> {
        let config = match std::mem::take(&mut self.state) {
            WorkflowState::Editing(config) => config,
            state => {
                let name = state.name();
                self.state = state;
                return Err(Error::InvalidTransition {
                    action: "submit",
                    state: name,
                });
            }
        };
        let history = if config.show_history {
            let dates = match config.history_anchor_date {
                Some(anchor) => revisit::generate(anchor, today, cycle_days),
                None => {
                    log::warn!("Historical data requested without an anchor date");
                    Ok(Vec::new())
                }
            };
            match dates {
                Ok(dates) => Some(dates),
                Err(err) => {
                    self.state = WorkflowState::Editing(config);
                    return Err(err);
                }
            }
        } else {
            None
        };
        log::debug!("Submitted notification for {}", config.point);
        let submission = Submission { config, history };
        self.state = WorkflowState::Submitted(submission.clone());
        Ok(submission)
    }

    /// Discards the popup's configuration.
    pub fn close(&mut self) {
        if !matches!(self.state, WorkflowState::Idle) {
            log::debug!("Close notification popup ({})", self.state.name());
        }
        self.state = WorkflowState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lw_entities::builders::*;
    use time::macros::date;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::try_from_lat_lng_deg(lat, lng).unwrap()
    }

    const TODAY: Date = date!(2024 - 10 - 19);

    #[test]
    fn open_update_submit_close() {
        let mut wf = NotificationWorkflow::new();
        assert_eq!(wf.state(), &WorkflowState::Idle);

        wf.open_at(point(45.0, -63.5));
        wf.update_field(FieldUpdate::parse("advanceNoticeUnit", "days").unwrap())
            .unwrap();
        let submission = wf.submit(TODAY, 16).unwrap();

        let expected = NotificationConfig::build()
            .point(45.0, -63.5)
            .advance_notice(1, NoticeUnit::Days)
            .finish();
        assert_eq!(submission.config(), &expected);
        assert_eq!(submission.history(), None);
        assert!(matches!(wf.state(), WorkflowState::Submitted(_)));

        wf.close();
        assert_eq!(wf.state(), &WorkflowState::Idle);
        assert!(wf.draft().is_none());
        assert!(wf.submission().is_none());
    }

    #[test]
    fn history_is_computed_on_submit() {
        let mut wf = NotificationWorkflow::new();
        wf.open_at(point(45.0, -63.5));
        wf.update_field(FieldUpdate::ShowHistory(true)).unwrap();
        wf.update_field(FieldUpdate::parse("selectedDate", "2024-10-03").unwrap())
            .unwrap();
        assert!(wf.draft().unwrap().show_history);
        assert!(wf.submission().is_none());

        let submission = wf.submit(TODAY, 16).unwrap();
        assert_eq!(
            submission.history(),
            Some(&[date!(2024 - 10 - 03), TODAY][..])
        );
    }

    #[test]
    fn history_without_anchor_is_empty() {
        let mut wf = NotificationWorkflow::new();
        wf.open_at(point(45.0, -63.5));
        wf.update_field(FieldUpdate::parse("showHistory", "on").unwrap())
            .unwrap();
        let submission = wf.submit(TODAY, 16).unwrap();
        assert_eq!(submission.history(), Some(&[][..]));
    }

    #[test]
    fn invalid_cycle_keeps_editing() {
        let mut wf = NotificationWorkflow::new();
        wf.open_at(point(45.0, -63.5));
        wf.update_field(FieldUpdate::ShowHistory(true)).unwrap();
        wf.update_field(FieldUpdate::HistoryAnchorDate(Some(date!(2024 - 01 - 01))))
            .unwrap();
        assert!(matches!(wf.submit(TODAY, 0), Err(Error::InvalidCycle(0))));
        assert!(wf.draft().is_some());
    }

    #[test]
    fn submitted_config_is_final() {
        let mut wf = NotificationWorkflow::new();
        wf.open_at(point(45.0, -63.5));
        wf.submit(TODAY, 16).unwrap();
        assert!(matches!(
            wf.update_field(FieldUpdate::PhoneNumber("555".into())),
            Err(Error::InvalidTransition {
                state: "submitted",
                ..
            })
        ));
        assert!(matches!(
            wf.submit(TODAY, 16),
            Err(Error::InvalidTransition {
                action: "submit",
                state: "submitted"
            })
        ));
        assert!(wf.submission().is_some());
    }

    #[test]
    fn idle_rejects_updates() {
        let mut wf = NotificationWorkflow::new();
        assert!(matches!(
            wf.update_field(FieldUpdate::ShowHistory(true)),
            Err(Error::InvalidTransition { state: "idle", .. })
        ));
        assert!(matches!(
            wf.submit(TODAY, 16),
            Err(Error::InvalidTransition { state: "idle", .. })
        ));
        wf.close();
        assert_eq!(wf.state(), &WorkflowState::Idle);
    }

    #[test]
    fn reopen_after_submit_starts_fresh() {
        let mut wf = NotificationWorkflow::new();
        wf.open_at(point(45.0, -63.5));
        wf.update_field(FieldUpdate::PhoneNumber("555-0100".into()))
            .unwrap();
        wf.submit(TODAY, 16).unwrap();
        wf.open_at(point(44.0, -65.0));
        let draft = wf.draft().unwrap();
        assert_eq!(draft, &NotificationConfig::new(point(44.0, -65.0)));
    }

    #[test]
    fn reopen_while_editing_keeps_inputs() {
        let mut wf = NotificationWorkflow::new();
        wf.open_at(point(45.0, -63.5));
        wf.update_field(FieldUpdate::PhoneNumber("555-0100".into()))
            .unwrap();
        wf.open_at(point(44.0, -65.0));
        let draft = wf.draft().unwrap();
        assert_eq!(draft.point, point(44.0, -65.0));
        assert_eq!(draft.phone_number, "555-0100");
    }

    #[test]
    fn parse_field_updates() {
        assert_eq!(
            FieldUpdate::parse("advanceNoticeNumber", "3").unwrap(),
            FieldUpdate::AdvanceNoticeAmount(NonZeroU32::new(3).unwrap())
        );
        assert_eq!(
            FieldUpdate::parse("phoneType", "SAT Phone").unwrap(),
            FieldUpdate::PhoneType(PhoneType::Satellite)
        );
        assert_eq!(
            FieldUpdate::parse("provider", "Select Provider").unwrap(),
            FieldUpdate::Provider(None)
        );
        assert_eq!(
            FieldUpdate::parse("provider", "AT&T").unwrap(),
            FieldUpdate::Provider(Some(Provider::Att))
        );
        assert_eq!(
            FieldUpdate::parse("mode", "thermal").unwrap(),
            FieldUpdate::DisplayMode(DisplayMode::Thermal)
        );
        assert_eq!(
            FieldUpdate::parse("selectedDate", "").unwrap(),
            FieldUpdate::HistoryAnchorDate(None)
        );
        assert!(matches!(
            FieldUpdate::parse("advanceNoticeAmount", "0"),
            Err(Error::InvalidField { .. })
        ));
        assert!(matches!(
            FieldUpdate::parse("advanceNoticeUnit", "fortnights"),
            Err(Error::InvalidField { .. })
        ));
        assert!(matches!(
            FieldUpdate::parse("selectedDate", "someday"),
            Err(Error::InvalidAnchorDate(_))
        ));
        assert!(matches!(
            FieldUpdate::parse("color", "red"),
            Err(Error::UnknownField(_))
        ));
    }
}
