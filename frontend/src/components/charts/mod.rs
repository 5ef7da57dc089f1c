pub mod canvas_surface;
pub mod statistics_panel;

use shared::StatisticsPayload;
use thiserror::Error;

use crate::services::format::CURRENCY;

/// Fixed identifiers for the chart slots on the page. Rendering a key
/// again replaces the previous chart instead of accumulating a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKey {
    Category,
    Daily,
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const INCOME_GREEN: Rgb = Rgb(0x10, 0xb9, 0x81);
pub const EXPENSE_RED: Rgb = Rgb(0xef, 0x44, 0x44);

/// Pie slice palette, cycled when there are more categories than colors.
pub const PIE_PALETTE: [Rgb; 7] = [
    Rgb(0xff, 0x63, 0x84),
    Rgb(0x36, 0xa2, 0xeb),
    Rgb(0xff, 0xce, 0x56),
    Rgb(0x4b, 0xc0, 0xc0),
    Rgb(0x99, 0x66, 0xff),
    Rgb(0xff, 0x9f, 0x40),
    Rgb(0x4c, 0xaf, 0x50),
];

/// Data for one chart, independent of any drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSeries {
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    Line {
        label: String,
        color: Rgb,
        points: Vec<(String, f64)>,
    },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no canvas mounted for {0:?}")]
    MissingCanvas(ChartKey),
    #[error("chart backend error: {0}")]
    Backend(String),
}

/// Rendering capability the statistics renderer depends on. Production
/// draws onto canvases; tests substitute a recording double.
pub trait ChartSurface {
    fn release_all(&mut self);
    fn render(&mut self, key: ChartKey, series: &ChartSeries) -> Result<(), ChartError>;
}

/// Maps a statistics payload to the charts it should produce. An empty
/// series produces no entry: absence of data is absence of the widget,
/// not an empty chart.
pub fn chart_plan(stats: &StatisticsPayload) -> Vec<(ChartKey, ChartSeries)> {
    let mut plan = Vec::new();

    if !stats.categories.is_empty() {
        plan.push((
            ChartKey::Category,
            ChartSeries::Pie {
                labels: stats.categories.iter().map(|c| c.name.clone()).collect(),
                values: stats.categories.iter().map(|c| c.value).collect(),
            },
        ));
    }

    if !stats.daily.is_empty() {
        plan.push((
            ChartKey::Daily,
            ChartSeries::Line {
                label: format!("Daily Expense ({})", CURRENCY),
                color: EXPENSE_RED,
                points: stats.daily.iter().map(|d| (d.date.clone(), d.amount)).collect(),
            },
        ));
    }

    if !stats.monthly.is_empty() {
        plan.push((
            ChartKey::Income,
            ChartSeries::Line {
                label: format!("Income ({})", CURRENCY),
                color: INCOME_GREEN,
                points: stats
                    .monthly
                    .iter()
                    .map(|m| (m.month.clone(), m.income))
                    .collect(),
            },
        ));
        plan.push((
            ChartKey::Expense,
            ChartSeries::Line {
                label: format!("Expense ({})", CURRENCY),
                color: EXPENSE_RED,
                points: stats
                    .monthly
                    .iter()
                    .map(|m| (m.month.clone(), m.expense))
                    .collect(),
            },
        ));
    }

    plan
}

/// Releases every previously held chart handle, then renders the plan.
pub fn render_statistics(
    surface: &mut dyn ChartSurface,
    stats: &StatisticsPayload,
) -> Result<(), ChartError> {
    surface.release_all();
    for (key, series) in chart_plan(stats) {
        surface.render(key, &series)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CategoryTotal, DailyPoint, MonthlyPoint, Totals};

    #[derive(Debug, PartialEq)]
    enum SurfaceEvent {
        ReleaseAll,
        Render(ChartKey),
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Vec<SurfaceEvent>,
    }

    impl ChartSurface for RecordingSurface {
        fn release_all(&mut self) {
            self.events.push(SurfaceEvent::ReleaseAll);
        }

        fn render(&mut self, key: ChartKey, _series: &ChartSeries) -> Result<(), ChartError> {
            self.events.push(SurfaceEvent::Render(key));
            Ok(())
        }
    }

    fn empty_stats() -> StatisticsPayload {
        StatisticsPayload {
            totals: Totals::default(),
            categories: Vec::new(),
            daily: Vec::new(),
            monthly: Vec::new(),
        }
    }

    fn full_stats() -> StatisticsPayload {
        StatisticsPayload {
            totals: Totals {
                income: 100.0,
                expense: 40.0,
            },
            categories: vec![
                CategoryTotal {
                    name: "Food".to_string(),
                    value: 25.0,
                },
                CategoryTotal {
                    name: "Rent".to_string(),
                    value: 15.0,
                },
            ],
            daily: vec![DailyPoint {
                date: "2024-03-05".to_string(),
                amount: 25.0,
            }],
            monthly: vec![MonthlyPoint {
                month: "2024-03".to_string(),
                income: 100.0,
                expense: 40.0,
            }],
        }
    }

    #[test]
    fn empty_payload_plans_no_charts() {
        assert!(chart_plan(&empty_stats()).is_empty());
    }

    #[test]
    fn empty_categories_skip_the_pie_chart() {
        let mut stats = full_stats();
        stats.categories.clear();

        let keys: Vec<ChartKey> = chart_plan(&stats).into_iter().map(|(k, _)| k).collect();
        assert!(!keys.contains(&ChartKey::Category));
        assert!(keys.contains(&ChartKey::Daily));
    }

    #[test]
    fn non_empty_categories_plan_exactly_one_pie_with_matching_data() {
        let plan = chart_plan(&full_stats());
        let pies: Vec<&ChartSeries> = plan
            .iter()
            .filter(|(k, _)| *k == ChartKey::Category)
            .map(|(_, s)| s)
            .collect();
        assert_eq!(pies.len(), 1);

        match pies[0] {
            ChartSeries::Pie { labels, values } => {
                assert_eq!(labels, &vec!["Food".to_string(), "Rent".to_string()]);
                assert_eq!(values, &vec![25.0, 15.0]);
            }
            other => panic!("expected a pie series, got {:?}", other),
        }
    }

    #[test]
    fn monthly_series_plans_independent_income_and_expense_lines() {
        let plan = chart_plan(&full_stats());
        let keys: Vec<ChartKey> = plan.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                ChartKey::Category,
                ChartKey::Daily,
                ChartKey::Income,
                ChartKey::Expense
            ]
        );
    }

    #[test]
    fn render_releases_handles_before_drawing() {
        let mut surface = RecordingSurface::default();
        render_statistics(&mut surface, &full_stats()).unwrap();

        assert_eq!(surface.events[0], SurfaceEvent::ReleaseAll);
        assert_eq!(surface.events.len(), 5);
    }

    #[test]
    fn repeated_renders_replace_rather_than_accumulate() {
        let mut surface = RecordingSurface::default();
        render_statistics(&mut surface, &full_stats()).unwrap();
        render_statistics(&mut surface, &full_stats()).unwrap();

        let releases = surface
            .events
            .iter()
            .filter(|e| **e == SurfaceEvent::ReleaseAll)
            .count();
        assert_eq!(releases, 2);

        // Every render batch starts with a release.
        assert_eq!(surface.events[0], SurfaceEvent::ReleaseAll);
        assert_eq!(surface.events[5], SurfaceEvent::ReleaseAll);
    }

    #[test]
    fn empty_payload_still_releases_previous_handles() {
        let mut surface = RecordingSurface::default();
        render_statistics(&mut surface, &empty_stats()).unwrap();

        assert_eq!(surface.events, vec![SurfaceEvent::ReleaseAll]);
    }
}
