//! State of the classroom panel: the selection, the four controls and the
//! feedback area.
//!
//! This is the UI collaborator of the evaluator without any rendering: a
//! front end reads `settings()`, `feedback()` and `tips()` after each action.

use serde::Serialize;

use crate::advisory;
use crate::climate::{Attribute, Season, TimeOfDay};
use crate::feedback::{self, FeedbackReport};
use crate::recommendation::{compute_preset, CurrentSettings};

/// What the feedback area currently shows.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    PresetApplied { message: String },
    Report(FeedbackReport),
}

impl Feedback {
    pub fn text(&self) -> String {
        match self {
            Feedback::PresetApplied { message } => message.clone(),
            Feedback::Report(report) => report.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassroomPanel {
    season: Season,
    time: TimeOfDay,
    settings: CurrentSettings,
    feedback: Option<Feedback>,
}

impl ClassroomPanel {
    /// New panel with the feedback area hidden.
    pub fn new(season: Season, time: TimeOfDay, settings: CurrentSettings) -> Self {
        Self {
            season,
            time,
            settings,
            feedback: None,
        }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn settings(&self) -> &CurrentSettings {
        &self.settings
    }

    /// Visible feedback, if any.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Changing the selection hides stale feedback.
    pub fn select_season(&mut self, season: Season) {
        self.season = season;
        self.feedback = None;
    }

    pub fn select_time(&mut self, time: TimeOfDay) {
        self.time = time;
        self.feedback = None;
    }

    /// Direct user input on one control. Feedback stays as it is until the
    /// next check.
    pub fn set_value(&mut self, attr: Attribute, value: f64) {
        self.settings.set(attr, value);
    }

    /// Move every control to its preset and show the confirmation message.
    pub fn apply_preset(&mut self) -> &Feedback {
        let preset = compute_preset(self.season, self.time);
        for (attr, value) in preset.iter() {
            self.settings.set(attr, *value);
        }
        tracing::debug!(season = %self.season, time = %self.time, "preset applied");
        self.feedback.insert(Feedback::PresetApplied {
            message: feedback::PRESET_APPLIED.to_string(),
        })
    }

    /// Evaluate the controls and show the report.
    pub fn check_settings(&mut self) -> &Feedback {
        let report = FeedbackReport::build(self.season, self.time, &self.settings);
        tracing::debug!(
            season = %self.season,
            time = %self.time,
            all_in_range = report.all_in_range(),
            "settings checked"
        );
        self.feedback.insert(Feedback::Report(report))
    }

    pub fn tips(&self) -> String {
        advisory::render_tips(self.season, self.time)
    }

    pub fn value_label(&self, attr: Attribute) -> String {
        feedback::value_label(attr, self.settings.get(attr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::{lookup, EvalResult};

    fn panel() -> ClassroomPanel {
        ClassroomPanel::new(
            Season::Spring,
            TimeOfDay::Morning,
            CurrentSettings::new(18.0, 70.0, 1.0, 300.0),
        )
    }

    #[test]
    fn test_new_panel_hides_feedback() {
        assert!(panel().feedback().is_none());
    }

    #[test]
    fn test_apply_preset_sets_every_control() {
        let mut panel = panel();
        let feedback = panel.apply_preset();
        assert_eq!(feedback.text(), feedback::PRESET_APPLIED);

        let preset = compute_preset(Season::Spring, TimeOfDay::Morning);
        for (attr, value) in preset.iter() {
            assert_eq!(panel.settings().get(attr), *value);
        }
        assert_eq!(panel.value_label(Attribute::Temperature), "22°C");
    }

    #[test]
    fn test_preset_then_check_is_all_in_range() {
        let mut panel = panel();
        panel.select_season(Season::Winter);
        panel.select_time(TimeOfDay::Noon);
        panel.apply_preset();

        match panel.check_settings() {
            Feedback::Report(report) => assert!(report.all_in_range()),
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn test_selection_change_hides_feedback() {
        let mut panel = panel();
        panel.check_settings();
        assert!(panel.feedback().is_some());

        panel.select_time(TimeOfDay::Evening);
        assert!(panel.feedback().is_none());

        panel.check_settings();
        panel.select_season(Season::Summer);
        assert!(panel.feedback().is_none());
    }

    #[test]
    fn test_set_value_then_check() {
        let mut panel = panel();
        panel.apply_preset();
        let max = lookup(Season::Spring, TimeOfDay::Morning).lighting.max;
        panel.set_value(Attribute::Lighting, max + 100.0);

        let Feedback::Report(report) = panel.check_settings().clone() else {
            panic!("expected report");
        };
        let lighting = &report.items[3];
        assert_eq!(lighting.attribute, Attribute::Lighting);
        assert!(!lighting.result.is_in_range());
        assert!(report
            .items
            .iter()
            .take(3)
            .all(|item| item.result == EvalResult::InRange));
    }

    #[test]
    fn test_tips_follow_selection() {
        let mut panel = panel();
        assert!(panel.tips().contains(advisory::season_tip(Season::Spring)));
        panel.select_season(Season::Autumn);
        let tips = panel.tips();
        assert!(tips.contains(advisory::season_tip(Season::Autumn)));
        assert!(tips.contains(advisory::time_tip(TimeOfDay::Morning)));
    }
}
