//! Text rendering of snapshots and the event log.

use sim_engine::{Snapshot, VisualEvent, VisualSink};
use sim_types::{EventLog, Region, Severity};

/// Prints subsystem activity as it happens, the text analog of the
/// highlight animations.
#[derive(Debug, Default)]
pub struct EchoSink;

impl VisualSink for EchoSink {
    fn emit(&mut self, event: VisualEvent) {
        match event {
            VisualEvent::Activated(subsystem) => println!("~ active: {}", subsystem),
            VisualEvent::Flashing(subsystem) => println!("~ flash:  {}", subsystem),
        }
    }
}

/// One-line status header: totals against their limits plus the lifetime
/// counters.
pub fn render_status(snapshot: &Snapshot) -> String {
    format!(
        "heap {}/{}  young {}/{}  old {}/{}  allocated {}  collected {}",
        snapshot.total_count(),
        snapshot.max_heap_size,
        snapshot.young_count,
        snapshot.young_limit,
        snapshot.old_count,
        snapshot.old_limit,
        snapshot.counters.total_allocated,
        snapshot.counters.total_collected,
    )
}

/// Region-by-region heap listing.
pub fn render_heap(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for (region, label) in [
        (Region::Eden, "Eden"),
        (Region::Survivor0, "S0"),
        (Region::Survivor1, "S1"),
        (Region::Old, "Tenured"),
    ] {
        let ids: Vec<String> = snapshot
            .objects
            .iter()
            .filter(|o| o.region == region)
            .map(|o| o.name())
            .collect();
        out.push_str(&format!("{:8} ({:3})  ", label, ids.len()));
        if ids.is_empty() {
            out.push('-');
        } else {
            out.push_str(&ids.join(" "));
        }
        out.push('\n');
    }
    out
}

/// Call stack listing, top frame first.
pub fn render_stack(snapshot: &Snapshot) -> String {
    if snapshot.frames.is_empty() {
        return "(empty stack)".to_string();
    }
    snapshot
        .frames
        .iter()
        .enumerate()
        .rev()
        .map(|(idx, frame)| format!("#{:<3} {}", idx, frame.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The newest `limit` log entries, most recent first.
pub fn render_log(log: &EventLog, limit: usize) -> String {
    if log.is_empty() {
        return "(no events yet)".to_string();
    }
    log.entries()
        .take(limit)
        .map(|entry| {
            let tag = match entry.severity {
                Severity::Info => "info  ",
                Severity::Action => "action",
                Severity::Error => "error ",
            };
            format!(
                "[{}] {} {}",
                entry.timestamp.format("%H:%M:%S"),
                tag,
                entry.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
