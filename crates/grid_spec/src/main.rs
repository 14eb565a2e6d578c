//! Render a grid component from attributes given on the command line.
//!
//! ```text
//! grid_spec dim="70 30; 50 50;" slot-style="border: 1px solid;" --slot=1:hello
//! grid_spec dim="50 50" no-fillers --json
//! ```

use anyhow::{Result, bail};
use env_logger::{Builder, Env};
use grid_spec::{GridComponent, GridConfig, Node, SlottedContent, markup};
use log::{error, info, warn};
use std::env;
use std::io::{self, Write as _};
use std::process::exit;

#[derive(Debug, Default)]
struct Options {
    config: GridConfig,
    slots: Vec<SlottedContent>,
    json: bool,
}

/// Parse `name=value` attributes, bare boolean attributes and `--` options.
fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut attrs: Vec<(String, String)> = Vec::new();
    for arg in args {
        if arg == "--json" {
            options.json = true;
            continue;
        }
        if let Some(rest) = arg.strip_prefix("--config=") {
            options.config = GridConfig::from_json(rest)?;
            continue;
        }
        if let Some(rest) = arg.strip_prefix("--slot=") {
            let Some((name, text)) = rest.split_once(':') else {
                bail!("expected --slot=N:text, got {arg:?}");
            };
            options.slots.push(SlottedContent::new(name, Node::text(text)));
            continue;
        }
        if arg.starts_with("--") && !arg.starts_with("--dd-") {
            bail!("unknown option {arg:?}");
        }
        match arg.split_once('=') {
            Some((name, value)) => attrs.push((name.to_owned(), value.to_owned())),
            None => attrs.push((arg, String::new())),
        }
    }
    // Attributes override whatever --config supplied, regardless of order.
    for (name, value) in &attrs {
        if !options.config.set_attribute(name, value) {
            warn!("unknown attribute {name:?} ignored");
        }
    }
    Ok(options)
}

fn run(options: Options) -> Result<()> {
    let component = GridComponent::new(options.config);
    info!(
        "rendered {} insertion points, {} slotted children",
        component.insertion_points().len(),
        options.slots.len()
    );
    let nodes = component.compose(&options.slots);
    let output = if options.json {
        serde_json::to_string_pretty(&markup::to_json(&nodes))?
    } else {
        markup::to_html(&nodes)
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

fn main() {
    let _log_init: Result<(), _> = Builder::from_env(Env::default().filter_or("RUST_LOG", "warn"))
        .is_test(false)
        .try_init();
    if let Err(err) = parse_args(env::args().skip(1)).and_then(run) {
        error!("error: {err:#}");
        exit(1);
    }
}
