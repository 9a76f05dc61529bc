use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for overhours
/// CLI dashboard to reconcile, report and annotate employee overtime
#[derive(Parser)]
#[command(
    name = "overhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "An overtime reporting CLI: reconcile branch spreadsheet logs with annotations using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override annotation-store path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override workbook path (.xlsx)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the annotation store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the annotation store (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Reload the workbook and rebuild the reconciled dataset
    Sync {
        #[arg(
            long = "force",
            help = "Clear the dataset snapshot and the session before reloading"
        )]
        force: bool,
    },

    /// KPI panel, cost breakdowns and diagnostics for a commercial period
    Report {
        /// Commercial year (default: current)
        #[arg(long = "ano")]
        ano: Option<i32>,

        /// Commercial month: number, Portuguese name or "todos"
        /// (default: current commercial month)
        #[arg(long = "mes")]
        mes: Option<String>,

        /// Branch code (VAL, RIB, MAR, JAC, GRU; default: todas)
        #[arg(long = "filial")]
        filial: Option<String>,

        #[arg(
            long = "nao-classificados",
            help = "Show only the unclassified-employees diagnostic"
        )]
        nao_classificados: bool,
    },

    /// List reconciled records and their annotations
    List {
        /// Restrict to a single date (YYYY-MM-DD)
        #[arg(long = "data")]
        data: Option<String>,

        #[arg(
            long = "periodo-inteiro",
            help = "Show the whole filtered period instead of a single date"
        )]
        periodo_inteiro: bool,

        #[arg(long = "ano")]
        ano: Option<i32>,

        #[arg(long = "mes")]
        mes: Option<String>,

        #[arg(long = "filial")]
        filial: Option<String>,
    },

    /// Write or apply the editable annotation grid
    Annotate {
        /// Write the editable grid (CSV) for the selected date to this path
        #[arg(long = "grid")]
        grid: Option<String>,

        /// Apply an edited grid file back to the annotation store
        #[arg(long = "apply")]
        apply: Option<String>,

        /// Date of the records being annotated (YYYY-MM-DD, default: today)
        #[arg(long = "data")]
        data: Option<String>,

        #[arg(long = "ano")]
        ano: Option<i32>,

        #[arg(long = "mes")]
        mes: Option<String>,

        #[arg(long = "filial")]
        filial: Option<String>,

        #[arg(long = "force", help = "Overwrite the grid file if it exists")]
        force: bool,
    },

    /// Export the filtered report
    Export {
        /// Output format
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "file")]
        file: String,

        #[arg(long = "ano")]
        ano: Option<i32>,

        #[arg(long = "mes")]
        mes: Option<String>,

        #[arg(long = "filial")]
        filial: Option<String>,

        /// Restrict to a single date (YYYY-MM-DD)
        #[arg(long = "data")]
        data: Option<String>,

        #[arg(
            long = "nao-classificados",
            help = "Export the unclassified-employees diagnostic instead of the report"
        )]
        nao_classificados: bool,

        #[arg(long = "force", help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Manage users and the login session
    User {
        #[arg(long = "add", help = "Create a new user")]
        add: bool,

        #[arg(long = "verify", help = "Check a user's credentials")]
        verify: bool,

        #[arg(long = "login", help = "Authenticate and store the session")]
        login: bool,

        #[arg(long = "logout", help = "Clear the stored session")]
        logout: bool,

        #[arg(long = "nome")]
        nome: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,

        #[arg(long = "senha")]
        senha: Option<String>,

        #[arg(long = "departamento")]
        departamento: Option<String>,
    },
}
