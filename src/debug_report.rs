use komut::{Entity, NlpResultVerbose, ProcessedCommand};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
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

pub fn print_run(input: &str, run: &NlpResultVerbose, command: &ProcessedCommand, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Komut: \"{}\"", input.trim()), ansi::CYAN)));
    println!("  {} {}", palette.dim("normalized:"), palette.paint(&run.result.processed_text, ansi::GRAY));

    println!("\n{}", palette.paint("━━━ Entities ━━━", ansi::GRAY));
    print_entities(&run.result.entities, run.details.produced, &palette);

    println!("\n{}", palette.paint("━━━ Intent scores ━━━", ansi::GRAY));
    print_scores(run, &palette);

    println!("\n{}", palette.paint("━━━ Command ━━━", ansi::GRAY));
    print_command(command, &palette);

    if !run.result.suggestions.is_empty() {
        println!("\n{}", palette.paint("━━━ Suggestions ━━━", ansi::GRAY));
        for suggestion in &run.result.suggestions {
            println!("  • {}", suggestion);
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Extract: {}  │  Resolve: {}  │  Conflicts: {}  │  Classify: {}",
        palette.paint(format!("{:?}", run.elapsed), ansi::GREEN),
        palette.paint(format!("{:?}", run.details.extract), ansi::CYAN),
        palette.dim(format!("{:?}", run.details.resolve)),
        palette.dim(format!("{:?}", run.details.conflicts)),
        palette.dim(format!("{:?}", run.details.classify)),
    );
    println!(
        "  {}",
        palette.dim(format!(
            "{} entity rules run, {} matched, {} candidates: {}",
            run.details.rules_considered,
            run.details.rules_matched,
            run.details.produced,
            run.details.active_rules.join(", ")
        ))
    );
    println!();
}

fn print_entities(entities: &[Entity], candidates: usize, palette: &ansi::Palette) {
    if entities.is_empty() {
        println!("{}", palette.dim("  No entities found"));
        return;
    }

    for (idx, ent) in entities.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(&ent.value, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("span {}..{}", ent.start, ent.end), ansi::YELLOW),
        );
        println!(
            "      {} {}  {} {}  {} {}  {} {}",
            palette.dim("type:"),
            palette.paint(ent.kind.as_str(), ansi::BLUE),
            palette.dim("│ value:"),
            palette.paint(ent.normalized.to_string(), ansi::MAGENTA),
            palette.dim("│ confidence:"),
            format!("{:.2}", ent.confidence),
            palette.dim("│ rule:"),
            palette.paint(&ent.rule, ansi::CYAN)
        );
    }

    let dropped = candidates.saturating_sub(entities.len());
    if dropped > 0 {
        println!("  {}", palette.dim(format!("{dropped} overlapping candidates dropped")));
    }
}

fn print_scores(run: &NlpResultVerbose, palette: &ansi::Palette) {
    let winner = run.result.intent;
    for row in run.details.scores.iter().filter(|row| row.score > 0.0) {
        let label = format!("{:<9}", row.intent.as_str());
        let label = if row.intent == winner {
            palette.bold(palette.paint(label, ansi::GREEN))
        } else {
            palette.paint(label, ansi::BLUE)
        };
        println!("  {} {:.1}", label, row.score);
    }
    println!(
        "  {} {}  {} {:.2}",
        palette.dim("intent:"),
        palette.bold(winner.as_str()),
        palette.dim("│ confidence:"),
        run.result.confidence
    );
}

fn print_command(command: &ProcessedCommand, palette: &ansi::Palette) {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    println!(
        "  {} {}  {} {:.2}  {} {}",
        palette.dim("intent:"),
        palette.bold(palette.paint(command.intent.as_str(), ansi::GREEN)),
        palette.dim("│ confidence:"),
        command.confidence,
        palette.dim("│ action:"),
        palette.paint(&command.action, ansi::CYAN),
    );
    println!(
        "  {} {}  {} {}  {} {}",
        palette.dim("module:"),
        palette.paint(or_dash(command.module.map(|m| m.to_string())), ansi::BLUE),
        palette.dim("│ operation:"),
        palette.paint(or_dash(command.operation.map(|o| o.to_string())), ansi::BLUE),
        palette.dim("│ target:"),
        palette.paint(or_dash(command.target.clone()), ansi::YELLOW),
    );

    let params = &command.parameters;
    if !params.is_empty() {
        let amounts: Vec<String> = params.amounts.iter().map(|m| format!("{} {}", m.amount, m.currency)).collect();
        let numbers: Vec<String> = params.numbers.iter().map(|n| n.to_string()).collect();
        for (label, values) in [
            ("numbers", numbers),
            ("dates", params.dates.clone()),
            ("names", params.names.clone()),
            ("ids", params.ids.clone()),
            ("amounts", amounts),
        ] {
            if !values.is_empty() {
                println!("  {} {}", palette.dim(format!("{label}:")), values.join(", "));
            }
        }
    }

    let conditions = &command.conditions;
    if !conditions.is_empty() {
        let mut parts = Vec::new();
        if let Some(status) = conditions.status {
            parts.push(format!("status={status}"));
        }
        if let Some(days) = conditions.last_days {
            parts.push(format!("lastDays={days}"));
        }
        if let Some(limit) = conditions.limit {
            parts.push(format!("limit={limit}"));
        }
        println!("  {} {}", palette.dim("conditions:"), parts.join(", "));
    }
}
