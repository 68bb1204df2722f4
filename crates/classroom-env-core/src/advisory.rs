//! Static learning tips, one per season and one per time of day.

use crate::climate::{Season, TimeOfDay};

/// Heading of the tips block.
pub const TIPS_HEADING: &str = "학습 팁";

pub fn season_tip(season: Season) -> &'static str {
    match season {
        Season::Spring => {
            "봄철에는 꽃가루가 많을 수 있어요. 환기할 때는 공기청정기나 필터를 함께 사용해요."
        }
        Season::Summer => {
            "여름에는 실내 온도가 쉽게 올라가요. 에어컨과 환기를 번갈아 사용하면 좋아요."
        }
        Season::Autumn => {
            "가을은 일교차가 커요. 환기 후에는 창문을 꼭 닫고 적절한 온도를 유지해요."
        }
        Season::Winter => {
            "겨울에는 공기가 건조해지기 쉬우니 가습기를 사용하고, 짧게 자주 환기해요."
        }
    }
}

pub fn time_tip(time: TimeOfDay) -> &'static str {
    match time {
        TimeOfDay::Morning => {
            "아침에는 학생들이 등교하면서 공기가 탁할 수 있으니 환기를 먼저 해 주세요."
        }
        TimeOfDay::Noon => "점심시간에는 활동량이 많으니 온도를 약간 낮추고, 환기를 충분히 해요.",
        TimeOfDay::Evening => {
            "저녁에는 햇빛이 줄어들어 조명이 중요해요. 집중하기 좋은 밝기를 맞춰요."
        }
    }
}

/// Season tip and time tip, looked up independently.
pub fn advisory_text(season: Season, time: TimeOfDay) -> (&'static str, &'static str) {
    (season_tip(season), time_tip(time))
}

/// The tips block: heading, season tip, time tip, one per line.
pub fn render_tips(season: Season, time: TimeOfDay) -> String {
    let (season_text, time_text) = advisory_text(season, time);
    format!("{TIPS_HEADING}\n{season_text}\n{time_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_text_independent_of_time() {
        for time in TimeOfDay::ALL {
            let (season_text, _) = advisory_text(Season::Spring, time);
            assert_eq!(season_text, season_tip(Season::Spring));
        }
    }

    #[test]
    fn test_time_text_independent_of_season() {
        for season in Season::ALL {
            let (_, time_text) = advisory_text(season, TimeOfDay::Evening);
            assert_eq!(time_text, time_tip(TimeOfDay::Evening));
        }
    }

    #[test]
    fn test_render_tips_order() {
        let block = render_tips(Season::Winter, TimeOfDay::Noon);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TIPS_HEADING);
        assert!(lines[1].starts_with("겨울에는"));
        assert!(lines[2].starts_with("점심시간에는"));
    }
}
