mod scan;
mod view;

use clap::{Parser, Subcommand, ValueEnum};
use scan::ScanArgs;
use std::path::PathBuf;
use tabled::Table;
use tagscan_api::{Member, Tag, Unit};
use tagscan_core::logging::{LogOptions, init_logging};
use tagscan_core::{TestSelection, UnitFinder};
use tracing::info;
use view::{MemberRow, UnitRow};

#[derive(Parser)]
#[command(
    name = "tagscan",
    version,
    about = "Find tagged units and members on a class path",
    long_about = "Tagscan walks the directories and archives of a class path, maps every loadable \
                  unit back to its dotted identifier, and reports the units (or their members) \
                  that carry a given tag."
)]
pub struct Cli {
    /// Also log to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory for log files (default: ~/.tagscan/logs)
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List units under a namespace
    Units {
        /// Dotted namespace to search; empty searches everything
        #[arg(value_name = "NAMESPACE", default_value = "")]
        namespace: String,

        /// Only units carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only units bound to exactly this runner
        #[arg(long, conflicts_with = "tag")]
        runner: Option<String>,

        #[command(flatten)]
        scan: ScanArgs,
    },
    /// List tagged members of the units under a namespace
    Members {
        #[arg(value_name = "NAMESPACE", default_value = "")]
        namespace: String,

        /// Tag the members must carry
        #[arg(long)]
        member_tag: String,

        /// Only look inside units carrying this tag
        #[arg(long)]
        tag: Option<String>,

        #[command(flatten)]
        scan: ScanArgs,
    },
    /// List test classes (or test methods) under a namespace
    Tests {
        #[arg(value_name = "NAMESPACE", default_value = "")]
        namespace: String,

        /// Which test classes to select
        #[arg(long, value_enum, default_value_t = TestKind::All)]
        kind: TestKind,

        /// List test methods instead of classes
        #[arg(long)]
        methods: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TestKind {
    All,
    Normal,
    DataDriven,
}

impl From<TestKind> for TestSelection {
    fn from(kind: TestKind) -> Self {
        match kind {
            TestKind::All => TestSelection::All,
            TestKind::Normal => TestSelection::Normal,
            TestKind::DataDriven => TestSelection::DataDriven,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut log_options = LogOptions::new("cli").with_stderr(cli.verbose);
    if let Some(dir) = &cli.log_dir {
        log_options = log_options.with_dir(dir);
    }
    let _guard = init_logging(&log_options)?;

    match cli.command {
        Commands::Units {
            namespace,
            tag,
            runner,
            scan,
        } => {
            let ctx = scan.build_context()?;
            let finder = ctx.finder();
            let units = match runner {
                Some(runner) => {
                    finder.find_units_by_exact_runner(&namespace, &Tag::new(runner))?
                }
                None => finder.find_units(&namespace, tag.map(Tag::new).as_ref())?,
            };
            print_units(&units, scan.json)
        }
        Commands::Members {
            namespace,
            member_tag,
            tag,
            scan,
        } => {
            let ctx = scan.build_context()?;
            let units = ctx
                .finder()
                .find_units(&namespace, tag.map(Tag::new).as_ref())?;
            let members = UnitFinder::find_members(&units, &Tag::new(member_tag));
            print_members(&members, scan.json)
        }
        Commands::Tests {
            namespace,
            kind,
            methods,
            scan,
        } => {
            let ctx = scan.build_context()?;
            let finder = ctx.test_finder(namespace, kind.into());
            if methods {
                let members = finder.test_methods()?;
                info!(
                    "{} test methods under '{}'",
                    members.len(),
                    finder.root_namespace()
                );
                print_members(&members, scan.json)
            } else {
                print_units(&finder.classes()?, scan.json)
            }
        }
    }
}

fn print_units(units: &[Unit], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(units)?);
    } else if units.is_empty() {
        println!("No units found.");
    } else {
        let rows: Vec<UnitRow> = units.iter().map(UnitRow::from_unit).collect();
        println!("{}", Table::new(rows));
        println!("{} units", units.len());
    }
    Ok(())
}

fn print_members(members: &[Member], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<MemberRow> = members.iter().map(MemberRow::from_member).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No members found.");
    } else {
        println!("{}", Table::new(rows));
        println!("{} members", members.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tests_command() {
        let cli = Cli::try_parse_from([
            "tagscan",
            "tests",
            "net.example",
            "--kind",
            "data-driven",
            "--methods",
            "--classpath",
            "target/classes",
            "--manifest",
            "units.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Tests {
                namespace,
                kind,
                methods,
                scan,
            } => {
                assert_eq!(namespace, "net.example");
                assert_eq!(TestSelection::from(kind), TestSelection::DataDriven);
                assert!(methods);
                assert_eq!(scan.classpath, "target/classes");
                assert!(!scan.json);
            }
            _ => panic!("expected tests command"),
        }
    }

    #[test]
    fn test_global_log_dir_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tagscan",
            "units",
            "pkg",
            "-c",
            "classes",
            "-m",
            "units.json",
            "--log-dir",
            "/tmp/tagscan-logs",
        ])
        .unwrap();
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/tagscan-logs")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_runner_conflicts_with_tag() {
        let result = Cli::try_parse_from([
            "tagscan",
            "units",
            "pkg",
            "--tag",
            "RunWith",
            "--runner",
            "ThucydidesRunner",
            "-c",
            "classes",
            "-m",
            "units.json",
        ]);
        assert!(result.is_err());
    }
}
