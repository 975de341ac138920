use clap::Parser;
use std::path::PathBuf;

/// devstrap - create the project's virtual environment, install its
/// requirements.txt, and install the project itself in editable mode.
///
/// Run from the project directory. The environment goes to
/// `<parent of project>/<project name>` unless overridden.
#[derive(Parser, Debug)]
#[command(name = "devstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this directory as the environment, verbatim (default: from DEVSTRAP_ENV_PATH).
    /// Takes precedence over any environment root.
    #[arg(long, value_name = "DIR")]
    pub env_path: Option<PathBuf>,

    /// Create the environment at <DIR>/<project name> (default: from DEVSTRAP_ENV_ROOT,
    /// else the parent of the project directory)
    #[arg(long, value_name = "DIR")]
    pub env_root: Option<PathBuf>,

    /// Python interpreter used to create the environment (default: from DEVSTRAP_PYTHON,
    /// else python3/python on PATH)
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Print the resolved environment path and exit without changing anything
    #[arg(long, default_value = "false")]
    pub print_path: bool,

    /// Only log warnings and errors; also passes --quiet to pip
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}
