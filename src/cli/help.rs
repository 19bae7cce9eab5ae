use std::fmt::Write;

#[derive(Debug, Clone)]
struct OptionGuide {
    flag: &'static str,
    description: &'static str,
}

#[derive(Debug, Clone)]
struct CommandGuide {
    names: &'static [&'static str],
    summary: &'static str,
    usage: &'static [&'static str],
    options: &'static [OptionGuide],
    examples: &'static [&'static str],
}

const GLOBAL_OPTIONS: &[OptionGuide] = &[
    OptionGuide {
        flag: "-h, --help",
        description: "Show contextual help information.",
    },
    OptionGuide {
        flag: "-V, --version",
        description: "Print the flatclass version.",
    },
];

const LOG_OPTIONS: &[OptionGuide] = &[
    OptionGuide {
        flag: "--log-format <auto|text|json>",
        description: "Log event format on stderr (env FLATCLASS_LOG_FORMAT).",
    },
    OptionGuide {
        flag: "--log-level <level>",
        description: "error, warn, info, debug or trace (env FLATCLASS_LOG_LEVEL).",
    },
];

const COMMAND_GUIDES: &[CommandGuide] = &[
    CommandGuide {
        names: &["lower", "compile"],
        summary: "Resolve class layouts and vtables from a JSON syntax tree.",
        usage: &["flatclass lower <ast.json> [-o <out>] [--format json|text] [options]"],
        options: &[
            OptionGuide {
                flag: "-o, --output <path>",
                description: "Write the artifact to <path> instead of stdout.",
            },
            OptionGuide {
                flag: "--format <json|text>",
                description: "Artifact format (default json).",
            },
            OptionGuide {
                flag: "--entry-point <name>",
                description: "Method that marks the driver class (default main).",
            },
            OptionGuide {
                flag: "--require-entry",
                description: "Fail unless exactly one class declares the entry point.",
            },
        ],
        examples: &[
            "flatclass lower build/ast.json -o build/classes.json",
            "flatclass lower ast.json --format text --log-level info",
        ],
    },
    CommandGuide {
        names: &["help"],
        summary: "Show general help or help for one command.",
        usage: &["flatclass help [command]"],
        options: &[],
        examples: &["flatclass help lower"],
    },
    CommandGuide {
        names: &["version"],
        summary: "Print the flatclass version.",
        usage: &["flatclass version", "flatclass --version"],
        options: &[],
        examples: &[],
    },
];

pub(crate) fn render_general_help() -> String {
    let mut out = String::new();
    out.push_str("flatclass - lower single-inheritance classes to flat layouts and vtables\n\n");
    out.push_str("USAGE:\n  flatclass <command> [options]\n\n");
    out.push_str("COMMANDS:\n");
    for guide in COMMAND_GUIDES {
        let _ = writeln!(out, "  {:9} {}", guide.names[0], guide.summary);
    }
    out.push('\n');
    out.push_str("GLOBAL OPTIONS:\n");
    for option in GLOBAL_OPTIONS {
        let _ = writeln!(out, "  {:18} {}", option.flag, option.description);
    }
    out.push('\n');
    out.push_str("Use `flatclass help <command>` to view detailed usage and examples.");
    out.push('\n');
    out
}

pub(crate) fn render_command_help(topic: &str) -> Option<String> {
    let guide = find_guide(topic)?;
    let mut out = String::new();
    let _ = writeln!(out, "flatclass {} - {}", guide.names[0], guide.summary);
    out.push('\n');

    out.push_str("USAGE:\n");
    for usage in guide.usage {
        let _ = writeln!(out, "  {usage}");
    }

    if guide.names.len() > 1 {
        out.push('\n');
        out.push_str("ALIASES:\n");
        for alias in &guide.names[1..] {
            let _ = writeln!(out, "  {alias}");
        }
    }

    if !guide.options.is_empty() {
        out.push('\n');
        out.push_str("OPTIONS:\n");
        for option in guide.options.iter().chain(LOG_OPTIONS) {
            let _ = writeln!(out, "  {:30} {}", option.flag, option.description);
        }
    }

    if !guide.examples.is_empty() {
        out.push('\n');
        out.push_str("EXAMPLES:\n");
        for example in guide.examples {
            let _ = writeln!(out, "  {example}");
        }
    }
    Some(out)
}

pub(crate) fn available_topics() -> impl Iterator<Item = &'static str> {
    COMMAND_GUIDES.iter().map(|guide| guide.names[0])
}

pub(crate) fn format_unknown_topic(topic: &str) -> String {
    let mut known = available_topics().collect::<Vec<_>>();
    known.sort_unstable();
    format!(
        "unknown help topic '{topic}'; available commands: {}",
        known.join(", ")
    )
}

fn find_guide(topic: &str) -> Option<&'static CommandGuide> {
    let topic = topic.to_ascii_lowercase();
    COMMAND_GUIDES
        .iter()
        .find(|guide| guide.names.iter().any(|name| *name == topic))
}
