//! Terminal rendering for serve sessions.

use std::cell::RefCell;
use std::io::{self, Write};

use clap::ValueEnum;
use console::style;
use tracing::debug;

use hearth_core::backend::{ServeBackend, ServePlan, ServeSession};
use hearth_core::dispatch::{Notice, Notifier, TracingNotifier};

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

/// Prints the dispatch banner to stdout and warnings to stderr.
///
/// In JSON mode notices only go to the log so stdout stays parseable.
#[derive(Debug)]
pub struct TerminalNotifier<O: Write = io::Stdout, E: Write = io::Stderr> {
    format: OutputFormat,
    out: RefCell<O>,
    err: RefCell<E>,
}

impl TerminalNotifier {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writers(format, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalNotifier<O, E> {
    /// Create a notifier with custom writers (for testing).
    pub fn with_writers(format: OutputFormat, out: O, err: E) -> Self {
        Self {
            format,
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    fn write_notice(&self, notice: &Notice) -> io::Result<()> {
        if notice.is_warning() {
            let mut err = self.err.borrow_mut();
            writeln!(err, "{} {}", style("⚠").yellow().bold(), notice.message())
        } else {
            let mut out = self.out.borrow_mut();
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                style(format!("{} {}", style("===").white(), notice.message())).bold()
            )?;
            writeln!(out)
        }
    }
}

impl<O: Write, E: Write> Notifier for TerminalNotifier<O, E> {
    fn notify(&self, notice: &Notice) {
        if self.format == OutputFormat::Json {
            TracingNotifier.notify(notice);
            return;
        }
        if let Err(e) = self.write_notice(notice) {
            debug!(error = %e, "failed to write notice");
        }
    }
}

/// Backend that reports the launch plan for a session.
#[derive(Debug)]
pub struct PlanPrinter {
    format: OutputFormat,
}

impl PlanPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ServeBackend for PlanPrinter {
    fn serve(&self, session: &ServeSession<'_>) -> hearth_core::Result<()> {
        let plan = ServePlan::build(session)?;
        match self.format {
            OutputFormat::Table => print_table(&plan),
            OutputFormat::Json => print_json(&plan)?,
        }
        Ok(())
    }
}

fn print_table(plan: &ServePlan) {
    if let Some(project) = &plan.project {
        println!("Project: {}", project);
    }
    let mode = if plan.emulators_only {
        "emulators"
    } else {
        "project"
    };
    println!("Mode: {}", mode);
    println!();
    println!("{:<12} {:<24} Root", "Target", "Address");
    println!("{}", "-".repeat(60));
    for listener in &plan.listeners {
        let root = listener
            .root
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<24} {}",
            listener.subsystem.to_string(),
            listener.address(),
            root
        );
    }
}

fn print_json(plan: &ServePlan) -> hearth_core::Result<()> {
    let output = serde_json::to_string_pretty(plan)
        .map_err(|e| hearth_core::Error::Serve(format!("failed to render plan: {e}")))?;
    println!("{}", output);
    Ok(())
}
