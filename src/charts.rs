//! Server-side chart geometry for the progress page.
//!
//! Templates only draw what is computed here: an SVG polyline for calories
//! over time and percentage-width bars for calories per workout type.

use chrono::NaiveDate;

use crate::models::{CaloriesByType, Workout};

pub const LINE_WIDTH: f64 = 640.0;
pub const LINE_HEIGHT: f64 = 240.0;
const PADDING: f64 = 24.0;

#[derive(Debug, Clone)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub calories: i64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct LineChart {
    pub points: Vec<ChartPoint>,
    /// `points` attribute for an SVG `<polyline>`.
    pub polyline: String,
    pub max_calories: i64,
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: i64,
    pub percent: u32,
}

/// Calories burned per workout, ordered by date. Workouts sharing a date
/// keep their stored order.
pub fn calories_over_time(workouts: &[Workout]) -> LineChart {
    let mut series: Vec<(NaiveDate, i64)> =
        workouts.iter().map(|w| (w.date, w.calories)).collect();
    series.sort_by_key(|(date, _)| *date);

    let max_calories = series.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => {
            return LineChart {
                points: Vec::new(),
                polyline: String::new(),
                max_calories,
            }
        }
    };

    let span_days = (last - first).num_days() as f64;
    let plot_w = LINE_WIDTH - 2.0 * PADDING;
    let plot_h = LINE_HEIGHT - 2.0 * PADDING;

    let points: Vec<ChartPoint> = series
        .into_iter()
        .map(|(date, calories)| {
            let x = if span_days > 0.0 {
                PADDING + plot_w * (date - first).num_days() as f64 / span_days
            } else {
                LINE_WIDTH / 2.0
            };
            let y = if max_calories > 0 {
                LINE_HEIGHT - PADDING - plot_h * calories as f64 / max_calories as f64
            } else {
                LINE_HEIGHT - PADDING
            };
            ChartPoint { date, calories, x, y }
        })
        .collect();

    let polyline = points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    LineChart {
        points,
        polyline,
        max_calories,
    }
}

/// One bar per workout type, scaled against the largest total.
pub fn calories_by_type_bars(totals: &[CaloriesByType]) -> Vec<Bar> {
    let max = totals.iter().map(|t| t.total_calories).max().unwrap_or(0);

    totals
        .iter()
        .map(|t| Bar {
            label: t.workout_type.to_string(),
            value: t.total_calories,
            percent: percent_of(t.total_calories, max),
        })
        .collect()
}

/// `value` as a whole percentage of `max`, clamped to 0..=100.
fn percent_of(value: i64, max: i64) -> u32 {
    if max <= 0 {
        return 0;
    }
    (value as f64 * 100.0 / max as f64).clamp(0.0, 100.0) as u32
}
