use energen::{ContractView, GuestDetails, NormalizeDetails, ShapeKind, Split, format_percent};

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

pub fn print_split(input: &str, label: &str, details: &NormalizeDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Normalizing {label}: \"{}\"", input.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Shape ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("shape:"), palette.paint(shape_name(details.shape), ansi::BLUE));
    println!("  {} {}", palette.dim("traits:"), palette.paint(format!("{:?}", details.traits), ansi::BLUE));
    println!(
        "  {} {}  {} {}",
        palette.dim("raw peak:"),
        palette.paint(details.raw_peak.as_deref().unwrap_or("∅"), ansi::YELLOW),
        palette.dim("│ raw off-peak:"),
        palette.paint(details.raw_off_peak.as_deref().unwrap_or("∅"), ansi::YELLOW),
    );

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    if details.split.is_empty() {
        println!("{}", palette.dim("  No percentage found"));
        println!("\n{}", palette.dim("  Tip: Set ENERGEN_DEBUG=1 to trace classification"));
    } else {
        print_split_row(&details.split, &palette);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.elapsed), ansi::GREEN));
    println!();
}

pub fn print_contract(guest: &GuestDetails, view: Option<&ContractView>, color: bool) {
    let palette = ansi::Palette::new(color);
    let name = guest.display_name().unwrap_or_else(|| guest.reference.clone());
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Guest: {name}"), ansi::CYAN)));

    let segments = guest.segment_names();
    if !segments.is_empty() {
        println!("  {} {}", palette.dim("segments:"), palette.paint(segments.join(", "), ansi::BLUE));
    }

    println!("\n{}", palette.paint("━━━ Contract ━━━", ansi::GRAY));
    let Some(view) = view else {
        println!("{}", palette.dim("  No energy data on this guest"));
        println!();
        return;
    };

    let rows: [(&str, Option<&str>); 10] = [
        ("Plan", view.plan.as_deref()),
        ("Contract term", view.contract_term.as_deref()),
        ("Contract start", view.contract_start.as_deref()),
        ("Contract end", view.contract_end.as_deref()),
        ("Next payment", view.next_payment.as_deref()),
        ("Account balance", Some(view.account_balance.as_str()).filter(|b| !b.is_empty())),
        ("Tariff rates", view.tariff_rates.as_deref()),
        ("Electricity usage", view.electricity_usage.as_deref()),
        ("Gas usage", view.gas_usage.as_deref()),
        ("Solar produced", view.solar_produced.as_deref()),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            println!("  {} {}", palette.dim(format!("{label}:")), palette.paint(value, ansi::GREEN));
        }
    }

    println!("\n{}", palette.paint("━━━ Tariff ━━━", ansi::GRAY));
    print_split_row(&view.tariff, &palette);
    println!("\n{}", palette.paint("━━━ Electricity split ━━━", ansi::GRAY));
    print_split_row(&view.electricity_split, &palette);
    println!();
}

fn print_split_row(split: &Split, palette: &ansi::Palette) {
    println!(
        "  {} {}  {} {}",
        palette.dim("peak:"),
        palette.bold(palette.paint(format_percent(split.peak), ansi::GREEN)),
        palette.dim("│ off-peak:"),
        palette.bold(palette.paint(format_percent(split.off_peak), ansi::GREEN)),
    );
}

fn shape_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Empty => "empty",
        ShapeKind::Sequence => "sequence",
        ShapeKind::Record => "record",
        ShapeKind::PlainText => "plain text",
    }
}
