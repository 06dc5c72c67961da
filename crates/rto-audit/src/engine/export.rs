use super::metrics::Metric;
use super::scoring::TransformedProvider;
use std::io::Write;

/// Write the comparison table for `providers` as CSV, one row per provider.
pub fn write_metric_table<W: Write>(
    writer: W,
    providers: &[TransformedProvider],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["id", "name", "primary_score", "price"];
    header.extend(Metric::ordered().map(Metric::label));
    csv_writer.write_record(&header)?;

    for provider in providers {
        let mut row = vec![
            provider.id.clone(),
            provider.name.clone(),
            provider.score.to_string(),
            provider.price.map(|price| price.to_string()).unwrap_or_default(),
        ];
        row.extend(
            Metric::ordered().map(|metric| provider.metrics.value(metric).to_string()),
        );
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
