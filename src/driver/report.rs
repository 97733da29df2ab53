/*!
 * Report Rendering
 * Console text for per-command outcomes, the block dump, and statistics
 */

use crate::core::limits::{REPORT_RULE_WIDTH, SIZE_UNIT, STATS_LABEL_WIDTH};
use crate::core::types::Size;
use crate::memory::{AllocationOutcome, BlockSnapshot, MemoryStats, ReleaseOutcome};
use std::io::{self, Write};

fn rule(out: &mut impl Write, ch: char) -> io::Result<()> {
    let line: String = std::iter::repeat(ch).take(REPORT_RULE_WIDTH).collect();
    writeln!(out, "{}", line)
}

/// Title framed by `=` rules
pub fn write_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    rule(out, '=')?;
    writeln!(out, "{}", title)?;
    rule(out, '=')
}

/// Program banner printed before anything else
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    write_section(out, "Memory Allocation Simulator (First-Fit)")?;
    writeln!(out)
}

pub fn write_source(out: &mut impl Write, source: &str) -> io::Result<()> {
    writeln!(out, "Reading from: {}", source)
}

/// Capacity line and the lead-in to the command results
pub fn write_capacity(out: &mut impl Write, total: Size) -> io::Result<()> {
    writeln!(out, "Total Memory: {} {}", total, SIZE_UNIT)?;
    rule(out, '-')?;
    writeln!(out)?;
    writeln!(out, "Processing requests...")?;
    writeln!(out)
}

pub fn write_allocation(
    out: &mut impl Write,
    owner: &str,
    size: Size,
    outcome: AllocationOutcome,
) -> io::Result<()> {
    let result = match outcome {
        AllocationOutcome::Allocated { .. } => "SUCCESS",
        AllocationOutcome::Failed => "FAILED (insufficient memory)",
    };
    writeln!(out, "REQUEST {} {} {} -> {}", owner, size, SIZE_UNIT, result)
}

pub fn write_release(out: &mut impl Write, owner: &str, outcome: ReleaseOutcome) -> io::Result<()> {
    let result = match outcome {
        ReleaseOutcome::Released { .. } => "SUCCESS",
        ReleaseOutcome::NotFound => "FAILED (process not found)",
    };
    writeln!(out, "RELEASE {} -> {}", owner, result)
}

/// One line per block, in address order
pub fn write_blocks(out: &mut impl Write, blocks: &[BlockSnapshot]) -> io::Result<()> {
    for block in blocks {
        match &block.owner {
            None => writeln!(
                out,
                "Block {}: [{}-{}]  FREE ({} {})",
                block.index,
                block.offset,
                block.last(),
                block.length,
                SIZE_UNIT
            )?,
            Some(owner) => writeln!(
                out,
                "Block {}: [{}-{}]  {} ({} {}) - ALLOCATED",
                block.index,
                block.offset,
                block.last(),
                owner,
                block.length,
                SIZE_UNIT
            )?,
        }
    }
    Ok(())
}

fn stat_line(out: &mut impl Write, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{:<width$}{}", label, value, width = STATS_LABEL_WIDTH)
}

pub fn write_stats(out: &mut impl Write, stats: &MemoryStats) -> io::Result<()> {
    stat_line(out, "Total Memory:", format!("{} {}", stats.total_memory, SIZE_UNIT))?;
    stat_line(
        out,
        "Allocated Memory:",
        format!(
            "{} {} ({:.2}%)",
            stats.allocated_memory,
            SIZE_UNIT,
            stats.allocated_percent()
        ),
    )?;
    stat_line(
        out,
        "Free Memory:",
        format!(
            "{} {} ({:.2}%)",
            stats.free_memory,
            SIZE_UNIT,
            stats.free_percent()
        ),
    )?;
    stat_line(out, "Number of Processes:", stats.process_count)?;
    stat_line(out, "Number of Free Blocks:", stats.free_block_count)?;
    stat_line(
        out,
        "Largest Free Block:",
        format!("{} {}", stats.largest_free_block, SIZE_UNIT),
    )?;
    stat_line(
        out,
        "External Fragmentation:",
        format!("{:.2}%", stats.external_fragmentation()),
    )?;
    writeln!(out)?;
    stat_line(out, "Successful Allocations:", stats.successful_allocations)?;
    stat_line(out, "Failed Allocations:", stats.failed_allocations)?;
    rule(out, '=')
}

/// Final block dump followed by the statistics summary
pub fn write_final_report(
    out: &mut impl Write,
    blocks: &[BlockSnapshot],
    stats: &MemoryStats,
) -> io::Result<()> {
    writeln!(out)?;
    write_section(out, "Final Memory State")?;
    write_blocks(out, blocks)?;
    writeln!(out)?;
    write_section(out, "Memory Statistics")?;
    write_stats(out, stats)
}
