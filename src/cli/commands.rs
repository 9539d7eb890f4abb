//! Command implementations for Xiphos CLI.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::automaton::{Automaton, AutomatonBuilder, ROOT_STATE_ID};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, XiphosError};

/// Execute a CLI command.
pub fn execute_command(args: XiphosArgs) -> Result<()> {
    match &args.command {
        Command::Scan(scan_args) => scan_files(scan_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Scan files or stdin for keyword occurrences.
fn scan_files(args: ScanArgs, cli_args: &XiphosArgs) -> Result<()> {
    let automaton = build_automaton(&args.keywords, args.keyword_file.as_deref())?;

    if cli_args.verbosity() > 1 {
        println!("Keywords: {}", automaton.keyword_count());
        println!("States: {}", automaton.state_count());
    }

    if args.files.is_empty() {
        let stdin = io::stdin();
        scan_reader(&automaton, stdin.lock(), None, &args, cli_args)?;
    } else {
        for path in &args.files {
            if cli_args.verbosity() > 1 {
                println!("Scanning: {}", path.display());
            }
            let file = File::open(path)?;
            scan_reader(&automaton, BufReader::new(file), Some(path), &args, cli_args)?;
        }
    }

    Ok(())
}

/// Scan one line-oriented input and print its matches.
fn scan_reader<R: BufRead>(
    automaton: &Automaton,
    reader: R,
    path: Option<&Path>,
    args: &ScanArgs,
    cli_args: &XiphosArgs,
) -> Result<()> {
    let file = path.map(|p| p.display().to_string());

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        match cli_args.output_format {
            OutputFormat::Human => {
                // A single hit is enough to print the line.
                if automaton.scan_iter(&line).next().is_some() {
                    print_matching_line(
                        file.as_deref(),
                        args.line_number.then_some(line_number),
                        &line,
                    );
                }
            }
            OutputFormat::Json => {
                for m in automaton.scan(&line) {
                    let record = MatchRecord {
                        file: file.clone(),
                        line: line_number,
                        start: m.start(),
                        end: m.end(),
                        pattern: m.pattern(),
                        keyword: m.keyword().to_string(),
                    };
                    print_match_record(&record, cli_args)?;
                }
            }
        }
    }

    Ok(())
}

/// Show statistics for a compiled keyword set.
fn show_stats(args: StatsArgs, cli_args: &XiphosArgs) -> Result<()> {
    let automaton = build_automaton(&args.keywords, args.keyword_file.as_deref())?;

    let stats = AutomatonStats {
        keywords: automaton.keyword_count(),
        states: automaton.state_count(),
        terminal_states: terminal_state_count(&automaton),
        transitions: transition_count(&automaton),
        max_depth: automaton_depth(&automaton),
    };

    output_result("Automaton statistics", &stats, cli_args)?;

    Ok(())
}

/// Build an automaton from keyword flags and an optional keyword file.
fn build_automaton(keywords: &[String], keyword_file: Option<&Path>) -> Result<Automaton> {
    let mut builder = AutomatonBuilder::new();

    for keyword in keywords {
        builder.add_keyword(keyword)?;
    }

    if let Some(path) = keyword_file {
        let file = File::open(path)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            // Skip blank lines; an empty keyword is invalid.
            if !line.is_empty() {
                builder.add_keyword(&line)?;
            }
        }
    }

    if builder.is_empty() {
        return Err(XiphosError::keyword(
            "no keywords given (use --keyword or --keyword-file)",
        ));
    }

    Ok(builder.build())
}

/// Count the states at which at least one keyword ends.
fn terminal_state_count(automaton: &Automaton) -> usize {
    automaton.states().iter().filter(|s| s.is_terminal()).count()
}

/// Count the forward transitions over all states.
fn transition_count(automaton: &Automaton) -> usize {
    automaton.states().iter().map(|s| s.transition_count()).sum()
}

/// Find the depth of the deepest state, which is the longest keyword length.
fn automaton_depth(automaton: &Automaton) -> usize {
    let mut max_depth = 0;
    let mut queue = VecDeque::from([(ROOT_STATE_ID, 0usize)]);

    while let Some((state_id, depth)) = queue.pop_front() {
        max_depth = max_depth.max(depth);
        if let Some(state) = automaton.state(state_id) {
            for (_, child) in state.transitions() {
                queue.push_back((child, depth + 1));
            }
        }
    }

    max_depth
}
