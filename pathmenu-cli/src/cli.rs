//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use pathmenu_api::ActionKind;

#[derive(Debug, Parser)]
#[command(name = "pathmenu", version, about = "Context actions for a file or folder")]
pub struct Args {
    /// File or folder to resolve actions for
    pub path: PathBuf,

    /// Execute the action with this id (e.g. copy_path, open_in_console)
    #[arg(long, value_name = "ACTION_ID")]
    pub run: Option<ActionKind>,

    /// Print the action list as JSON
    #[arg(long, conflicts_with = "run")]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let args = Args::try_parse_from(["pathmenu", "/tmp/app.exe"]).unwrap();
        assert_eq!(args.path, PathBuf::from("/tmp/app.exe"));
        assert!(args.run.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_parse_run() {
        let args =
            Args::try_parse_from(["pathmenu", "/tmp", "--run", "open_in_console", "-v"]).unwrap();
        assert_eq!(args.run, Some(ActionKind::OpenInConsole));
        assert!(args.verbose);
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(Args::try_parse_from(["pathmenu", "/tmp", "--run", "format_disk"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_run() {
        assert!(Args::try_parse_from(["pathmenu", "/tmp", "--json", "--run", "copy_path"]).is_err());
    }
}
