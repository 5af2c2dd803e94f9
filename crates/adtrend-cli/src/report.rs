//! Console layout for a finished run.

use std::fmt::{self, Write};

use adtrend_core::{Category, CategoryResult, TrendReport, MAX_RESULTS_PER_CATEGORY};
use chrono::{DateTime, TimeZone};

const RULE_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 50;
const IMAGE_PREVIEW_CHARS: usize = 70;

/// Writes the human-readable report for `report`.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub(crate) fn write_report<W, Tz>(
    out: &mut W,
    report: &TrendReport,
    generated_at: DateTime<Tz>,
) -> fmt::Result
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let rule = "═".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "       Fashion Trend Bot | Facebook Ad Library Edition"
    )?;
    writeln!(out, "       {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "{rule}")?;

    writeln!(
        out,
        "Collected {} trending ads (ranked by Ad Library relevancy).",
        report.total_records()
    )?;
    writeln!(
        out,
        "Reach figures are not published; inspect the raw snapshots if parsing comes back empty."
    )?;
    writeln!(out)?;

    for (category, result) in report.iter() {
        write_category(out, category, result)?;
    }

    writeln!(
        out,
        "Finished. Adjust scroll count or selectors if results look thin."
    )?;
    writeln!(out, "{rule}")
}

fn write_category<W: Write>(
    out: &mut W,
    category: Category,
    result: &CategoryResult,
) -> fmt::Result {
    let (icon, label) = match category {
        Category::Men => ("👔", "MEN'S"),
        Category::Women => ("👗", "WOMEN'S"),
    };

    if result.is_empty() {
        writeln!(
            out,
            "⚠ No {} ads found. Check the raw snapshot and update selectors.",
            label.to_lowercase()
        )?;
        return writeln!(out);
    }

    writeln!(out, "{icon} {label} TOP {MAX_RESULTS_PER_CATEGORY} ADS")?;
    writeln!(out, "{}", "─".repeat(SECTION_RULE_WIDTH))?;
    for (rank, ad) in result.iter().enumerate() {
        writeln!(out, "{:2}. {}", rank + 1, ad.summary)?;
        writeln!(
            out,
            "    Brand: {}  |  Price: {}  |  Link: {}",
            ad.brand, ad.price, ad.detail_url
        )?;
        writeln!(out, "    Image: {}", preview(&ad.image_url))?;
        writeln!(out)?;
    }
    Ok(())
}

fn preview(url: &str) -> String {
    if url.chars().count() > IMAGE_PREVIEW_CHARS {
        let head: String = url.chars().take(IMAGE_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        url.to_string()
    }
}
