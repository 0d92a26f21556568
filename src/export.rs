use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::design::FilterResult;
use crate::display::{format_component, format_value, is_plausible};
use crate::service::FilterSpec;

/// Output encoding for component tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `designator = value` line per component.
    #[default]
    Text,
    Json,
    Csv,
}

// ---------------------------------------------------------------------------
// Row model shared by the JSON and CSV writers
// ---------------------------------------------------------------------------

/// One component as exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRow {
    /// Label of the filter this row belongs to (batch output only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub designator: String,
    /// Farads or Henries.
    pub value: f64,
    pub unit: &'static str,
    pub display: String,
    pub plausible: bool,
}

/// Flatten a result into export rows, warning about implausible values.
pub fn component_rows(result: &FilterResult, filter: Option<&str>) -> Vec<ComponentRow> {
    result
        .iter()
        .map(|component| {
            let plausible = is_plausible(&component);
            if !plausible {
                log::warn!(
                    "{} = {} is outside the buildable range",
                    component.designator,
                    format_value(&component)
                );
            }
            ComponentRow {
                filter: filter.map(str::to_string),
                designator: component.designator.to_string(),
                value: component.value,
                unit: component.kind().unit(),
                display: format_value(&component),
                plausible,
            }
        })
        .collect()
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    spec: &'a FilterSpec,
    components: Vec<ComponentRow>,
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Write one filter's component table.
pub fn write_result<W: Write>(mut out: W, result: &FilterResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(&mut out, result),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &component_rows(result, None))
                .context("writing JSON")?;
            writeln!(out).context("writing JSON")
        }
        OutputFormat::Csv => write_csv(out, component_rows(result, None)),
    }
}

/// Write several labelled filters in one document.
pub fn write_batch<W: Write>(
    mut out: W,
    entries: &[(FilterSpec, FilterResult)],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, (spec, result)) in entries.iter().enumerate() {
                if i > 0 {
                    writeln!(out).context("writing text")?;
                }
                writeln!(out, "# {}", spec.label()).context("writing text")?;
                write_text(&mut out, result)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let doc: Vec<BatchEntry> = entries
                .iter()
                .map(|(spec, result)| BatchEntry {
                    spec,
                    components: component_rows(result, None),
                })
                .collect();
            serde_json::to_writer_pretty(&mut out, &doc).context("writing JSON")?;
            writeln!(out).context("writing JSON")
        }
        OutputFormat::Csv => {
            let rows = entries
                .iter()
                .flat_map(|(spec, result)| component_rows(result, Some(&spec.label())))
                .collect();
            write_csv(out, rows)
        }
    }
}

// -- helpers --

fn write_text<W: Write>(out: &mut W, result: &FilterResult) -> Result<()> {
    for component in result.iter() {
        writeln!(out, "{}", format_component(&component)).context("writing text")?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: W, rows: Vec<ComponentRow>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &rows {
        writer
            .serialize(row)
            .with_context(|| format!("writing CSV row for {}", row.designator))?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::get_values;

    fn render(result: &FilterResult, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, result, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lists_every_component() {
        let result = get_values("bessel", "lowpass", 1, 1.0, None, 50.0).unwrap();
        assert_eq!(render(&result, OutputFormat::Text), "C1 = 6.366 nF\n");
    }

    #[test]
    fn csv_has_header_and_rows() {
        let result = get_values("bessel", "highpass", 2, 10.0, None, 75.0).unwrap();
        let text = render(&result, OutputFormat::Csv);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("designator,value,unit,display,plausible"));
        assert!(lines.next().unwrap().starts_with("L1,"));
        assert!(lines.next().unwrap().starts_with("C1,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn json_rows_carry_units() {
        let result = get_values("bessel", "bandpass", 3, 100.0, Some(10.0), 50.0).unwrap();
        let text = render(&result, OutputFormat::Json);
        let rows: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["designator"], "Cp1");
        assert_eq!(rows[0]["unit"], "F");
        assert!(rows[0].get("filter").is_none());
    }

    #[test]
    fn batch_csv_labels_rows() {
        let spec: FilterSpec = serde_json::from_str(
            r#"{ "response": "bessel", "type": "lowpass", "order": 2, "frequency": 1.0 }"#,
        )
        .unwrap();
        let result = spec.values().unwrap();
        let mut buf = Vec::new();
        write_batch(&mut buf, &[(spec, result)], OutputFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("filter,designator,"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn implausible_rows_are_marked() {
        // 10 Hz into 1 Ω needs tens of millifarads.
        let result = get_values("bessel", "lowpass", 1, 0.00001, None, 1.0).unwrap();
        let rows = component_rows(&result, None);
        assert!(!rows[0].plausible);
    }
}
