//! Output formatting for query results

use crate::query::{CommonMatch, Repeat};
use crate::tree::TreeStats;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Per-pattern result of `count` and `find`
#[derive(Debug, Clone, Serialize)]
pub struct PatternReport {
    pub pattern: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<usize>>,
}

/// A substring result of `lrs` or `lcs`
#[derive(Debug, Clone, Serialize)]
pub struct SubstringReport {
    pub substring: String,
    pub len: usize,
    /// Start in the indexed text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Start in the second text (lcs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_position: Option<usize>,
    /// Occurrences in the indexed text (lrs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl SubstringReport {
    pub fn from_repeat(text: &[u8], repeat: Option<Repeat>) -> Self {
        match repeat {
            Some(r) => Self {
                substring: lossy(&text[r.position..r.position + r.len]),
                len: r.len,
                position: Some(r.position),
                other_position: None,
                count: Some(r.count),
            },
            None => Self::empty(),
        }
    }

    pub fn from_common(text: &[u8], common: Option<CommonMatch>) -> Self {
        match common {
            Some(m) => Self {
                substring: lossy(&text[m.position..m.position + m.len]),
                len: m.len,
                position: Some(m.position),
                other_position: Some(m.other_position),
                count: None,
            },
            None => Self::empty(),
        }
    }

    fn empty() -> Self {
        Self {
            substring: String::new(),
            len: 0,
            position: None,
            other_position: None,
            count: None,
        }
    }
}

/// Render bytes for display
pub fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Colored stdout, or plain when `color` is false
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print any report as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)
}

/// Write `pattern:count` lines (ripgrep `-c` style)
pub fn write_counts<W: WriteColor>(out: &mut W, reports: &[PatternReport]) -> io::Result<()> {
    for report in reports {
        write_pattern(out, &report.pattern)?;
        write!(out, ":")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", report.count)?;
        out.reset()?;
    }
    Ok(())
}

/// Write `pattern:pos pos pos` lines
pub fn write_positions<W: WriteColor>(out: &mut W, reports: &[PatternReport]) -> io::Result<()> {
    for report in reports {
        write_pattern(out, &report.pattern)?;
        write!(out, ":")?;

        let positions = report.positions.as_deref().unwrap_or(&[]);
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        for (i, pos) in positions.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{}", pos)?;
        }
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write a substring result, highlighted, followed by its location
pub fn write_substring<W: WriteColor>(out: &mut W, report: &SubstringReport) -> io::Result<()> {
    if report.len == 0 {
        return writeln!(out);
    }

    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{}", report.substring)?;
    out.reset()?;

    let mut details = vec![format!("len {}", report.len)];
    if let Some(pos) = report.position {
        details.push(format!("at {}", pos));
    }
    if let Some(pos) = report.other_position {
        details.push(format!("other {}", pos));
    }
    if let Some(count) = report.count {
        details.push(format!("{} occurrences", count));
    }

    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(out, " ({})", details.join(", "))?;
    out.reset()?;
    Ok(())
}

/// Write repeats as `len<TAB>count<TAB>position<TAB>substring`
pub fn write_repeats<W: WriteColor>(out: &mut W, text: &[u8], repeats: &[Repeat]) -> io::Result<()> {
    for r in repeats {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}\t{}\t{}", r.len, r.count, r.position)?;
        out.reset()?;
        writeln!(out, "\t{}", lossy(&text[r.position..r.position + r.len]))?;
    }
    Ok(())
}

/// Write tree statistics
pub fn write_stats<W: WriteColor>(out: &mut W, stats: &TreeStats) -> io::Result<()> {
    writeln!(out, "Suffix Tree Statistics")?;
    writeln!(out, "======================")?;
    writeln!(out)?;
    writeln!(out, "Text length:      {}", stats.text_len)?;
    writeln!(out, "Nodes:            {}", stats.node_count)?;
    writeln!(out, "Internal nodes:   {}", stats.internal_count)?;
    writeln!(out, "Leaves:           {}", stats.leaf_count)?;
    writeln!(out, "Suffix links:     {}", stats.suffix_link_count)?;
    writeln!(out, "Longest repeat:   {}", stats.max_repeat_len)?;
    writeln!(out, "Case-insensitive: {}", stats.case_insensitive)?;
    Ok(())
}

fn write_pattern<W: WriteColor>(out: &mut W, pattern: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(out, "{}", pattern)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>,
    {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn report(pattern: &str, positions: Vec<usize>) -> PatternReport {
        PatternReport {
            pattern: pattern.to_string(),
            count: positions.len(),
            positions: Some(positions),
        }
    }

    #[test]
    fn test_write_counts() {
        let reports = vec![report("ana", vec![1, 3]), report("x", vec![])];
        let text = render(|out| write_counts(out, &reports));
        assert_eq!(text, "ana:2\nx:0\n");
    }

    #[test]
    fn test_write_positions() {
        let reports = vec![report("ana", vec![1, 3]), report("x", vec![])];
        let text = render(|out| write_positions(out, &reports));
        assert_eq!(text, "ana:1 3\nx:\n");
    }

    #[test]
    fn test_write_substring() {
        let repeat = Repeat { position: 1, len: 4, count: 2 };
        let report = SubstringReport::from_repeat(b"mississippi", Some(repeat));
        let text = render(|out| write_substring(out, &report));
        assert_eq!(text, "issi (len 4, at 1, 2 occurrences)\n");

        let empty = SubstringReport::from_common(b"abc", None);
        assert_eq!(render(|out| write_substring(out, &empty)), "\n");
    }

    #[test]
    fn test_write_repeats() {
        let repeats = [Repeat { position: 1, len: 3, count: 2 }];
        let text = render(|out| write_repeats(out, b"banana", &repeats));
        assert_eq!(text, "3\t2\t1\tana\n");
    }

    #[test]
    fn test_json_skips_missing_fields() {
        let report = PatternReport {
            pattern: "a".to_string(),
            count: 3,
            positions: None,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"pattern":"a","count":3}"#
        );
    }
}
