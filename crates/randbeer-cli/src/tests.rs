use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["randbeer"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_browse_command() {
    let cli = Cli::try_parse_from(["randbeer", "browse"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Browse)));
}

#[test]
fn parses_show_defaults() {
    let cli = Cli::try_parse_from(["randbeer", "show"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Show {
            brewery: false,
            json: false
        })
    ));
}

#[test]
fn parses_show_brewery_json() {
    let cli = Cli::try_parse_from(["randbeer", "show", "--brewery", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Show {
            brewery: true,
            json: true
        })
    ));
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["randbeer", "brew"]).is_err());
}
