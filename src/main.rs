use anyhow::Result;
use clap::Parser;

use reorder_list_tui::{
    Choice, EmitMode, ListPolicy, PromptConfigBuilder, PromptOutcome, normalize_choices,
    run_prompt,
};

/// Demo binary: reorder and select items straight from the command line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Items to put on the list; a built-in sample list is used when empty.
    items: Vec<String>,

    /// Prompt message.
    #[arg(long, default_value = "Arrange the items")]
    message: String,

    /// Stop at the list ends instead of wrapping around.
    #[arg(long)]
    no_loop: bool,

    /// Reject confirmation while nothing is checked.
    #[arg(long)]
    required: bool,

    /// Emit only checked values instead of the whole reordered list.
    #[arg(long)]
    checked_only: bool,

    /// Number of list rows shown at a time.
    #[arg(long, default_value_t = 7)]
    page_size: usize,
}

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let items = if args.items.is_empty() {
        ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"]
            .map(String::from)
            .to_vec()
    } else {
        args.items.clone()
    };

    let policy = ListPolicy {
        emit: if args.checked_only {
            EmitMode::CheckedOnly
        } else {
            EmitMode::AllItems
        },
        ..ListPolicy::default()
    };

    let config = PromptConfigBuilder::default()
        .message(args.message)
        .entries(normalize_choices(
            items.into_iter().map(Choice::new).collect(),
        ))
        .page_size(args.page_size)
        .looping(!args.no_loop)
        .required(args.required)
        .policy(policy)
        .build()?;

    match run_prompt(&config)? {
        PromptOutcome::Submitted(values) => {
            for value in values {
                println!("{value}");
            }
        }
        PromptOutcome::Cancelled => println!("(cancelled)"),
    }
    Ok(())
}
