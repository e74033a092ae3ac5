// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::html,
    error::{Result, RunError},
    file::{read_input, write_names},
    names::{reverse_name, NameSet},
    specs::classlist,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Names written (after dedup).
    pub count: usize,
    /// Absolute path of the file written.
    pub output: PathBuf,
}

/// Load → extract → reformat → dedup/sort → write.
///
/// The output file is only touched when at least one name was found.
pub fn run(opts: &AppOptions) -> Result<RunSummary> {
    if !opts.input.exists() {
        let path = opts.resolved_input();
        loge!("Input missing: {}", path.display());
        return Err(RunError::MissingInput { path });
    }

    let text = read_input(&opts.input)?;
    logf!("Read {} bytes from {}", text.len(), opts.input.display());

    let names = collect_names(&text);
    if names.is_empty() {
        logw!("No anchors matched in {}", opts.input.display());
        return Err(RunError::NoNames);
    }

    write_names(&opts.output, &names)?;
    let output = opts.resolved_output();
    logf!("Wrote {} names to {}", names.len(), output.display());

    Ok(RunSummary { count: names.len(), output })
}

/// Everything short of IO: parse, filter, reformat, dedup, sort.
pub fn collect_names(text: &str) -> NameSet {
    let doc = html::parse(text);
    let mut raw = 0usize;
    let names: NameSet = classlist::raw_names(&doc)
        .inspect(|n| {
            raw += 1;
            logd!("Anchor: {n:?}");
        })
        .map(|n| reverse_name(&n))
        .collect();
    logd!("{raw} matching anchors, {} distinct names", names.len());
    names
}
