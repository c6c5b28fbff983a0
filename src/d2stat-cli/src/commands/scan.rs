//! Marker scan diagnostic

use anyhow::{Context, Result};
use d2stat::{marker_offsets, ItemScanner};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Handle `scan`
pub fn handle(input: &Path, items: bool) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    println!("--- Scanning '{}' for 'JM' markers ---", input.display());
    print!("{}", render_markers(&data));

    if items {
        print!("{}", render_items(&data));
    }

    Ok(())
}

/// Every marker offset and the total count
pub fn render_markers(data: &[u8]) -> String {
    let mut out = String::new();
    let mut count = 0;

    for offset in marker_offsets(data) {
        let _ = writeln!(out, "Found 'JM' marker at offset {} ({:#x})", offset, offset);
        count += 1;
    }

    let _ = writeln!(out, "--- Total 'JM' markers: {} ---", count);
    out
}

/// Records the statistics scanner counts, one per line
pub fn render_items(data: &[u8]) -> String {
    let mut out = String::new();
    let mut scanner = ItemScanner::new(data);

    let _ = writeln!(out, "--- Item records ---");
    for item in scanner.by_ref() {
        let code = item.type_code();
        let quality = item
            .quality_tier()
            .map(|tier| tier.name().to_string())
            .unwrap_or_else(|| format!("Unknown ({})", item.quality));

        let _ = write!(
            out,
            "{:#07x}  {:<4}  {:<12}",
            item.offset,
            String::from_utf8_lossy(&code).trim_end(),
            quality
        );
        if item.is_ring {
            let _ = write!(out, "  ring");
        }
        if item.class_specific {
            let _ = write!(out, "  class-specific");
        }
        if item.quality_tier() == Some(d2stat::QualityTier::Unique) {
            let _ = write!(out, "  unique_id={}", item.unique_id);
        }
        if item.is_named_ring() {
            let _ = write!(out, "  (SoJ)");
        }
        out.push('\n');
    }

    if let Some(offset) = scanner.truncated_at() {
        let _ = writeln!(out, "Item list truncated at offset {:#x}", offset);
    }

    out
}
