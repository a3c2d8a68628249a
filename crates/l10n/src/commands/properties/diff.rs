use clap::{Args, ValueEnum};
use itertools::Itertools;
use l10n_properties::{PropertiesReader, PropertyTable};
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};
use std::{fmt::Display, fs::File, path::PathBuf};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Report which keys were added, removed or modified
    #[default]
    Semantic,
    /// Also show inline value differences for modified keys
    Full,
}

#[derive(Debug, Eq, PartialEq)]
enum Change {
    Added(String),
    Removed(String),
    Modified(String, Vec<String>),
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Change::Added(key) => {
                writeln!(f, "✅ {}", key.green())
            }
            Change::Removed(key) => {
                writeln!(f, "❌ {}", key.red())
            }
            Change::Modified(key, context) => {
                writeln!(f, "🔃 {}", key.blue())?;
                for line in context {
                    writeln!(f, "  {}", line)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Args)]
pub struct DiffArgs {
    /// An input properties file
    #[arg(short, long, value_name = "FILE")]
    left: PathBuf,

    /// An input properties file
    #[arg(short, long, value_name = "FILE")]
    right: PathBuf,

    /// Comparison mode
    #[arg(short, long, value_enum, default_value_t=Mode::Semantic)]
    mode: Mode,
}

impl DiffArgs {
    fn collect_changes(&self, left: &PropertyTable, right: &PropertyTable) -> Vec<Change> {
        let mut result = Vec::new();

        // Find Added Entries
        right
            .keys()
            .filter(|k| !left.contains_key(k.as_str()))
            .sorted()
            .map(|k| Change::Added(k.to_string()))
            .for_each(|c| result.push(c));

        // Find Removed Entries
        left.keys()
            .filter(|k| !right.contains_key(k.as_str()))
            .sorted()
            .map(|k| Change::Removed(k.to_string()))
            .for_each(|c| result.push(c));

        // Find Differences
        left.keys()
            .filter(|k| right.contains_key(k.as_str()))
            .sorted()
            .filter_map(|k| {
                let old = left.get(k).cloned().unwrap_or_default();
                let new = right.get(k).cloned().unwrap_or_default();

                let diff = TextDiff::from_lines(&old, &new);
                if diff.ratio() < 1.0 {
                    let mut comparison = Vec::new();
                    if self.mode == Mode::Full {
                        for op in diff.ops().iter() {
                            for change in diff.iter_inline_changes(op) {
                                let mut context = String::new();
                                for (emphasized, value) in change.iter_strings_lossy() {
                                    if emphasized {
                                        if change.tag() == ChangeTag::Insert {
                                            context.push_str(&format!(
                                                "{}",
                                                value.green().underline()
                                            ));
                                        } else {
                                            context
                                                .push_str(&format!("{}", value.red().underline()));
                                        }
                                    } else {
                                        context.push_str(&format!("{}", value.dimmed()));
                                    }
                                }
                                comparison.push(context.trim_end().to_string());
                            }
                        }
                    }
                    Some(Change::Modified(k.to_string(), comparison))
                } else {
                    None
                }
            })
            .for_each(|c| result.push(c));

        result
    }

    pub fn handle(&self) -> Result<()> {
        let l = File::open(&self.left)
            .into_diagnostic()
            .context(format!("path: {}", &self.left.display()))?;
        let left = PropertiesReader::new(l)?;

        let r = File::open(&self.right)
            .into_diagnostic()
            .context(format!("path: {}", &self.right.display()))?;
        let right = PropertiesReader::new(r)?;

        for change in self.collect_changes(left.table(), right.table()) {
            print!("{}", change);
        }

        Ok(())
    }
}
