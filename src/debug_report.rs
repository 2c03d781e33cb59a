use std::fmt::Display;
use std::time::Instant;

use numerus::{Context, Extractor, Query, Segment};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// What the CLI extracts from its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Number,
    Duration,
    DateTime,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Number => "Numbers",
            Kind::Duration => "Durations",
            Kind::DateTime => "Date/times",
        }
    }
}

pub fn print_run(input: &str, extractor: &Extractor, context: &Context, kinds: &[Kind], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Extracting: \"{}\"", input.trim_end()), ansi::CYAN)));
    println!(
        "  {} {}  {} {}",
        palette.dim("locale:"),
        palette.paint(format!("{:?}", extractor.locale()), ansi::BLUE),
        palette.dim("│ reference:"),
        palette.paint(context.reference_time.to_string(), ansi::BLUE),
    );

    let started = Instant::now();
    for &kind in kinds {
        println!("\n{}", palette.paint(format!("━━━ {} ━━━", kind.label()), ansi::GRAY));
        match kind {
            Kind::Number => print_query(&extractor.numbers(input), input, &palette),
            Kind::Duration => print_query(&extractor.durations(input), input, &palette),
            Kind::DateTime => print_query(&extractor.date_times(input, context), input, &palette),
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", started.elapsed()), ansi::GREEN));
    println!();
}

fn print_query<T: Display>(query: &Query<'_, T>, input: &str, palette: &ansi::Palette) {
    let segments = query.mixed_with_text();
    if !segments.iter().any(|s| matches!(s, Segment::Value(_))) {
        println!("{}", palette.dim("  Nothing found"));
        return;
    }

    let line: String = segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => palette.dim(text),
            Segment::Value(value) => palette.bold(palette.paint(format!("[{value}]"), ansi::GREEN)),
        })
        .collect();
    println!("  {line}");

    println!("\n  {}", palette.dim("possible intervals:"));
    for (idx, range) in query.possible_intervals().iter().enumerate() {
        let text = input.get(range.span.bytes.clone()).unwrap_or_default();
        let value = if range.is_largest_possible {
            palette.bold(palette.paint(range.value.to_string(), ansi::GREEN))
        } else {
            palette.paint(range.value.to_string(), ansi::CYAN)
        };
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            value,
            palette.dim("│"),
            palette.paint(format!("tokens {}..{}", range.span.start, range.span.end), ansi::YELLOW),
            palette.dim(format!("\"{text}\"")),
        );
    }
}
