//! Stage timeline types

use std::fmt;

/// Sleep stage encoded by a chart column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SleepStage {
    N1,
    N2,
    N3,
    Rem,
    Wake,
}

impl SleepStage {
    /// Stage drawn directly on the baseline in the given color, if any.
    ///
    /// REM and Wake have no baseline color.
    pub fn from_baseline_color(pixel: &image::Rgb<u8>) -> Option<Self> {
        use crate::sleep_chart::palette::{N1_COLOR, N2_COLOR, N3_COLOR};

        match *pixel {
            p if p == N1_COLOR => Some(SleepStage::N1),
            p if p == N2_COLOR => Some(SleepStage::N2),
            p if p == N3_COLOR => Some(SleepStage::N3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepStage::N1 => "N1",
            SleepStage::N2 => "N2",
            SleepStage::N3 => "N3",
            SleepStage::Rem => "REM",
            SleepStage::Wake => "Wake",
        }
    }
}

impl fmt::Display for SleepStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage change: `stage` begins at `minute` and lasts until the next change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageChange {
    pub minute: u32,
    pub stage: SleepStage,
}

impl StageChange {
    pub fn new(minute: u32, stage: SleepStage) -> Self {
        Self { minute, stage }
    }
}

/// Run-length compressed stage sequence.
///
/// No two consecutive entries share a stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    changes: Vec<StageChange>,
}

impl Timeline {
    pub fn new() -> Self {
        Self { changes: Vec::new() }
    }

    /// Appends a per-column sample, keeping it only if the stage differs from the last
    /// kept entry.
    pub fn push_sample(&mut self, minute: u32, stage: SleepStage) {
        if self.changes.last().is_some_and(|last| last.stage == stage) {
            return;
        }
        self.changes.push(StageChange::new(minute, stage));
    }

    pub fn changes(&self) -> &[StageChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StageChange> {
        self.changes.iter()
    }

    /// Minute of the last stage change, which the report prints as the total duration.
    pub fn total_duration(&self) -> Option<u32> {
        self.changes.last().map(|c| c.minute)
    }
}

impl FromIterator<(u32, SleepStage)> for Timeline {
    fn from_iter<I: IntoIterator<Item = (u32, SleepStage)>>(iter: I) -> Self {
        let mut timeline = Timeline::new();
        for (minute, stage) in iter {
            timeline.push_sample(minute, stage);
        }
        timeline
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a StageChange;
    type IntoIter = std::slice::Iter<'a, StageChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_sample_collapses_repeats() {
        let timeline: Timeline = [
            (0, SleepStage::N1),
            (1, SleepStage::N1),
            (2, SleepStage::N2),
            (3, SleepStage::N2),
            (4, SleepStage::N1),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            timeline.changes(),
            &[
                StageChange::new(0, SleepStage::N1),
                StageChange::new(2, SleepStage::N2),
                StageChange::new(4, SleepStage::N1),
            ]
        );
        assert_eq!(timeline.total_duration(), Some(4));
    }

    #[test]
    fn test_empty_timeline_has_no_duration() {
        let timeline = Timeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.total_duration(), None);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(SleepStage::Rem.to_string(), "REM");
        assert_eq!(SleepStage::Wake.to_string(), "Wake");
        assert_eq!(SleepStage::N3.to_string(), "N3");
    }

    #[test]
    fn test_from_baseline_color() {
        use crate::sleep_chart::palette::*;

        assert_eq!(SleepStage::from_baseline_color(&N1_COLOR), Some(SleepStage::N1));
        assert_eq!(SleepStage::from_baseline_color(&N2_COLOR), Some(SleepStage::N2));
        assert_eq!(SleepStage::from_baseline_color(&N3_COLOR), Some(SleepStage::N3));
        assert_eq!(SleepStage::from_baseline_color(&REM_COLOR), None);
        assert_eq!(SleepStage::from_baseline_color(&BASELINE_GRAY), None);
        // one channel off is not a match
        assert_eq!(SleepStage::from_baseline_color(&image::Rgb([0, 129, 0])), None);
    }
}
