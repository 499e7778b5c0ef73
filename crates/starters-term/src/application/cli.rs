use clap::Arg;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub fn build() -> Command {
    return Command::new("starters")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick an example prompt to kick off a chat session")
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .help(format!(
                    "Path to the configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::Format.to_string())
                .long(ConfigKey::Format.to_string())
                .help("How the picked prompt is written to stdout [default: text]")
                .value_parser(["text", "json"])
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::LogFile.to_string())
                .long(ConfigKey::LogFile.to_string())
                .help("Write a JSON debug log to this file")
                .num_args(1),
        )
        .subcommand(
            Command::new("config").about("Output the default configuration file to stdout"),
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build().debug_assert();
    }
}
