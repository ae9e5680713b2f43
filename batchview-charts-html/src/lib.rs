use anyhow::{anyhow, Result};
use batchview_api_types::EnrichedBatch;
use batchview_charts::{draw_batch_availability_chart, ChartOptions};
use plotters_svg::SVGBackend;

/// Renders the batch availability chart into an SVG string for embedding.
pub fn render_chart(
    batches: &[EnrichedBatch],
    options: ChartOptions,
    size: (u32, u32),
) -> Result<String> {
    let mut buffer = String::new();
    {
        let backend = SVGBackend::with_string(&mut buffer, size);
        draw_batch_availability_chart(backend, batches, options)
            .map_err(|e| anyhow!("Failed to draw chart: {}", e))?;
    }
    Ok(buffer)
}
