use console::Style;
use histmatch_core::channel::ColorSpace;
use histmatch_core::consts::CHANNEL_COUNT;
use histmatch_core::matching::{MappingKind, MappingTable};
use histmatch_core::pipeline::config::MatchConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_path(s: &Styles, label: &str, path: Option<&std::path::Path>) {
    match path {
        Some(p) => println!("  {:<14}{}", s.label.apply_to(label), s.path.apply_to(p.display())),
        None => println!("  {:<14}{}", s.label.apply_to(label), s.disabled.apply_to("not set")),
    }
}

pub fn print_match_summary(config: &MatchConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Histogram Matching"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    print_path(&s, "Source", config.source.as_deref());
    print_path(&s, "Target", config.target.as_deref());
    print_path(&s, "Output", Some(config.output.as_path()));
    print_path(&s, "Mapping", config.export_mapping.as_deref());
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color space"),
        s.method.apply_to(config.color_space)
    );
    println!();

    println!("  {}", s.header.apply_to("Channels"));
    let mask = config.channels.as_array();
    for (label, selected) in config.color_space.channel_labels().iter().zip(mask) {
        let state = if selected {
            s.value.apply_to("matched")
        } else {
            s.disabled.apply_to("passthrough")
        };
        println!("    {:<12}{}", s.label.apply_to(label), state);
    }
    println!();
}

/// One-line description of a table: "identity" or "<min>..=<max> <order>".
pub fn describe_mapping(table: &MappingTable) -> String {
    match table.kind() {
        MappingKind::Identity => "identity".to_string(),
        MappingKind::Monotonic { min, max } => format!("{min}..={max} monotonic"),
        MappingKind::NonMonotonic { min, max } => format!("{min}..={max} non-monotonic"),
    }
}

pub fn print_mapping_summary(color_space: ColorSpace, mappings: &[MappingTable; CHANNEL_COUNT]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Mapping tables"));
    for (label, table) in color_space.channel_labels().iter().zip(mappings.iter()) {
        let description = describe_mapping(table);
        let styled = if table.kind() == MappingKind::Identity {
            s.disabled.apply_to(description)
        } else {
            s.value.apply_to(description)
        };
        println!("    {:<12}{}", s.label.apply_to(label), styled);
    }
    println!();
}
