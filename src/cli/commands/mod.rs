pub(crate) mod common;

mod lower;

use super::CommandDescriptor;
use lower::parse as parse_lower_command;

const COMMANDS: &[CommandDescriptor] = &[CommandDescriptor {
    name: "lower",
    aliases: &["compile"],
    parser: parse_lower_command,
}];

pub(crate) fn descriptors() -> &'static [CommandDescriptor] {
    COMMANDS
}
