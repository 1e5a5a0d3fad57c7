use std::fmt::Write;

use glbuf::UniformLayout;
use glbuf::context::recording::GlCall;

/// One row per field plus a total line.
pub fn layout_table(layout: &UniformLayout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "index  type    offset  size");
    for (index, field) in layout.fields().iter().enumerate() {
        let _ = writeln!(
            out,
            "{index:>5}  {:<6}  {:>6}  {:>4}",
            field.ty.to_string(),
            field.offset,
            field.size
        );
    }
    let _ = writeln!(out, "total: {} floats ({} bytes)", layout.size(), layout.byte_size());
    out
}

pub fn call_trace(calls: &[GlCall]) -> String {
    let mut out = String::new();
    for call in calls {
        let _ = writeln!(out, "{call:?}");
    }
    out
}
