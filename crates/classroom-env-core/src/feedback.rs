//! Student-facing text for presets and evaluation results.
//!
//! Rendering is plain text; the caller decides how to present it.

use serde::Serialize;
use std::fmt;

use crate::climate::{Attribute, Season, TimeOfDay};
use crate::recommendation::{
    evaluate, lookup, CurrentSettings, Direction, EvalResult, Range,
};

/// Shown after a preset has been applied to the controls.
pub const PRESET_APPLIED: &str =
    "추천 값이 적용되었어요! 슬라이더를 움직여 나만의 설정을 만들어도 좋아요.";

/// `"{min}{unit} ~ {max}{unit}"`; whole numbers print without a decimal.
pub fn format_range(range: &Range, unit: &str) -> String {
    format!("{}{unit} ~ {}{unit}", range.min, range.max)
}

/// Control label such as `22°C` or `525lx`.
pub fn value_label(attr: Attribute, value: f64) -> String {
    format!("{value}{}", attr.unit())
}

/// One feedback sentence for one attribute.
pub fn feedback_line(attr: Attribute, range: &Range, result: EvalResult) -> String {
    let range_text = format_range(range, attr.unit());
    match result {
        EvalResult::InRange => format!(
            "좋아요! {}가 권장 범위({range_text}) 안에 있어요.",
            attr.label()
        ),
        EvalResult::Adjust { direction } => {
            let verb = match direction {
                Direction::Increase => "조금 더 높여",
                Direction::Decrease => "조금 낮춰",
            };
            format!(
                "조정 필요! {}를 {verb} 주세요. 권장 범위는 {range_text}입니다.",
                attr.label()
            )
        }
    }
}

pub fn report_header(season: Season, time: TimeOfDay) -> String {
    format!(
        "{} {}에 어울리는 환경인지 확인해 봤어요.",
        season.display_name(),
        time.display_name()
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackItem {
    pub attribute: Attribute,
    pub value: f64,
    pub range: Range,
    pub result: EvalResult,
    pub message: String,
}

/// Evaluation of a full settings snapshot, with rendered messages.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackReport {
    pub season: Season,
    pub time: TimeOfDay,
    pub header: String,
    pub items: Vec<FeedbackItem>,
}

impl FeedbackReport {
    pub fn build(season: Season, time: TimeOfDay, current: &CurrentSettings) -> Self {
        let ranges = lookup(season, time);
        let evaluation = evaluate(season, time, current);
        let items = Attribute::ALL
            .into_iter()
            .map(|attr| FeedbackItem {
                attribute: attr,
                value: current.get(attr),
                range: ranges[attr],
                result: evaluation[attr],
                message: feedback_line(attr, &ranges[attr], evaluation[attr]),
            })
            .collect();
        Self {
            season,
            time,
            header: report_header(season, time),
            items,
        }
    }

    pub fn all_in_range(&self) -> bool {
        self.items.iter().all(|item| item.result.is_in_range())
    }
}

impl fmt::Display for FeedbackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for item in &self.items {
            writeln!(f, "- {}", item.message)?;
        }
        Ok(())
    }
}
