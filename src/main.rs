use anyhow::Result;
use clap::{Parser, Subcommand};
use tin::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "tin",
    version = "0.1.0",
    about = "A tiny version control system",
    long_about = "tin is a minimal version-control engine: a content-addressed \
    object store layered with a commit history graph, branch pointers, and a \
    staging index. It is a learning-scale tool, not a git replacement.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command hashes each file into the object store and records it in the staging index. \
        Missing files are skipped with a warning."
    )]
    Add {
        #[arg(required = true, help = "The files to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit from the staging index",
        long_about = "This command snapshots the staged files into a new commit and advances the current branch. \
        The message words are joined with single spaces."
    )]
    Commit {
        #[arg(required = true, num_args = 1.., help = "The commit message words")]
        message: Vec<String>,
    },
    #[command(name = "log", about = "Show the commit history, newest first")]
    Log,
    #[command(
        name = "status",
        about = "Show staged files and working-tree changes since the last commit"
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Switch to a branch or detach at a commit",
        long_about = "This command resolves the target as a branch name first, then as a commit hash, \
        and restores the resolved commit's files into the working tree, overwriting existing files."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch name or commit hash to check out")]
        target: String,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => {
                    std::fs::create_dir_all(path)?;
                    Repository::new(path, Box::new(std::io::stdout()))?
                }
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::Add { paths } => open_repository()?.add(paths)?,
        Commands::Commit { message } => open_repository()?.commit(&message.join(" "))?,
        Commands::Log => open_repository()?.log()?,
        Commands::Status => open_repository()?.status()?,
        Commands::Checkout { target } => open_repository()?.checkout(target)?,
        Commands::Branch { name } => open_repository()?.branch(name)?,
    }

    Ok(())
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::open(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}
