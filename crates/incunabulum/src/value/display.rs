//! Display implementation for Value
//!
//! Rank ≥ 1 values print their shape on one line and their elements on the
//! next; scalars print only their element. Every number is followed by a
//! space. A box prints as `< ` followed by its contents, with the contents'
//! continuation lines indented two spaces per enclosing box.

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0)
    }
}

/// Write `value`, assuming the cursor already sits where its first line goes.
fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, depth: usize) -> fmt::Result {
    let mut at_line_start = false;
    if value.rank() > 0 {
        for len in value.shape() {
            write!(f, "{} ", len)?;
        }
        writeln!(f)?;
        at_line_start = true;
    }

    match value.data() {
        Data::Plain(items) => {
            if at_line_start {
                indent(f, depth)?;
            }
            for n in items {
                write!(f, "{} ", n)?;
            }
            writeln!(f)
        }
        Data::Boxed(items) if items.is_empty() => {
            if at_line_start {
                indent(f, depth)?;
            }
            writeln!(f)
        }
        Data::Boxed(items) => {
            for (i, inner) in items.iter().enumerate() {
                if at_line_start || i > 0 {
                    indent(f, depth)?;
                }
                write!(f, "< ")?;
                write_value(f, inner, depth + 1)?;
            }
            Ok(())
        }
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        write!(f, "  ")?;
    }
    Ok(())
}
