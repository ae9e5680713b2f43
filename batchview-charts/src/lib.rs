use anyhow::anyhow;
use batchview_api_types::EnrichedBatch;
use itertools::Itertools;
use log::debug;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::{
    prelude::*,
    style::{
        text_anchor::{HPos, Pos, VPos},
        FontDesc, FontFamily, FontStyle, RGBColor,
    },
};

// Surface colors lifted from the dashboard the chart is embedded in.
const BACKGROUND: RGBColor = RGBColor(213, 210, 205);
const REMAINING_FILL: RGBColor = RGBColor(156, 139, 126);
const SOLD_FILL: RGBColor = RGBColor(194, 169, 152);

/// Bar segments narrower than this many pixels drop their in-bar count label.
const MIN_LABEL_WIDTH: f64 = 30.0;

/// Selects which count of a batch a bar segment shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarSegment {
    Remaining,
    Sold,
}

#[derive(Clone, Debug, Default)]
pub struct ChartOptions {
    pub background_rgb: Option<(u8, u8, u8)>,
    pub remaining_rgb: Option<(u8, u8, u8)>,
    pub sold_rgb: Option<(u8, u8, u8)>,
    pub text_rgb: Option<(u8, u8, u8)>,
}

fn color_or(rgb: Option<(u8, u8, u8)>, default: RGBColor) -> RGBColor {
    rgb.map(|(r, g, b)| RGBColor(r, g, b)).unwrap_or(default)
}

/// In-bar count label for one segment of a batch's bar, or `None` when the
/// segment is too narrow to hold text.
pub fn bar_label(
    batch: &EnrichedBatch,
    segment: BarSegment,
    available_width: f64,
) -> Option<String> {
    if available_width < MIN_LABEL_WIDTH {
        return None;
    }
    let count = match segment {
        BarSegment::Remaining => batch.remaining,
        BarSegment::Sold => batch.sold,
    };
    Some(count.to_string())
}

/// The two detail lines shown for a hovered batch.
pub fn batch_summary(batch: &EnrichedBatch) -> [String; 2] {
    [
        format!(
            "Remaining: {} of {} ({}%)",
            batch.remaining, batch.total, batch.remaining_percentage
        ),
        format!(
            "Sold: {} of {} ({}%)",
            batch.sold, batch.total, batch.sold_percentage
        ),
    ]
}

/// Availability summary for every batch, one block per batch.
pub fn summary_text(batches: &[EnrichedBatch]) -> String {
    batches
        .iter()
        .map(|batch| {
            let [remaining, sold] = batch_summary(batch);
            format!("{}\n  {remaining}\n  {sold}", batch.batch)
        })
        .join("\n")
}

pub fn draw_batch_availability_chart<'a, T>(
    backend: T,
    batches: &[EnrichedBatch],
    options: ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    if batches.is_empty() {
        Err(anyhow!("no batches"))?;
    }
    debug!("drawing availability chart for {} batches", batches.len());

    let background = color_or(options.background_rgb, BACKGROUND);
    let text = color_or(options.text_rgb, RGBColor(0, 0, 0));
    let series = [
        ("Available", BarSegment::Remaining, color_or(options.remaining_rgb, REMAINING_FILL)),
        ("Sold", BarSegment::Sold, color_or(options.sold_rgb, SOLD_FILL)),
    ];

    let root = backend.into_drawing_area();
    root.fill(&background)?;

    let rows = batches.len() as i32;
    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(0)
        .y_label_area_size(80)
        .margin(10)
        .caption(
            "Batch Availability",
            ("sans-serif", 24.0).into_font().color(&text),
        )
        .build_cartesian_2d(0i32..100i32, (0i32..rows).into_segmented())?;

    // First batch reads from the top, so rows are laid out in reverse.
    let row_of = move |index: usize| rows - 1 - index as i32;

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(TRANSPARENT)
        .label_style(&text)
        .x_labels(0)
        .y_labels(batches.len())
        .y_label_formatter(&|segment| {
            let index = match segment {
                SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => *index,
                SegmentValue::Last => return String::new(),
            };
            batches
                .get((rows - 1 - index) as usize)
                .map(|batch| batch.batch.clone())
                .unwrap_or_default()
        })
        .draw()?;

    for (name, segment, color) in series {
        chart
            .draw_series(batches.iter().enumerate().map(|(index, batch)| {
                let row = row_of(index);
                let (start, end) = match segment {
                    BarSegment::Remaining => (0, batch.remaining_percentage as i32),
                    BarSegment::Sold => (batch.remaining_percentage as i32, 100),
                };
                Rectangle::new(
                    [
                        (start, SegmentValue::Exact(row)),
                        (end, SegmentValue::Exact(row + 1)),
                    ],
                    color.filled(),
                )
            }))?
            .label(name)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    // Segment widths in pixels decide whether a count label fits.
    let (x_pixels, _) = chart.plotting_area().get_pixel_range();
    let plot_width = (x_pixels.end - x_pixels.start) as f64;
    let label_style = FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Bold)
        .color(&WHITE)
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(batches.iter().enumerate().flat_map(|(index, batch)| {
        let row = row_of(index);
        [BarSegment::Remaining, BarSegment::Sold]
            .into_iter()
            .flat_map(|segment| {
                let (start, percentage) = match segment {
                    BarSegment::Remaining => (0, batch.remaining_percentage),
                    BarSegment::Sold => {
                        (batch.remaining_percentage as i32, batch.sold_percentage)
                    }
                };
                let width = plot_width * percentage as f64 / 100.0;
                bar_label(batch, segment, width).map(|label| {
                    Text::new(
                        label,
                        (start + 2, SegmentValue::CenterOf(row)),
                        label_style.clone(),
                    )
                })
            })
            .collect::<Vec<_>>()
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .border_style(TRANSPARENT)
        .background_style(background.filled())
        .label_font(&text)
        .draw()?;

    // To avoid the IO failure being ignored silently, we manually call the present function
    root.present()?;

    Ok(())
}
