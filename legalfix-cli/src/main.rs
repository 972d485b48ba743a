mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::{ConfigMerger, LegalizeOverrides};
use fs_err as fs;
use legalfix_core::adapters::{
    ColorBallMatcher, RuleBookRibbons, RuleBookValidator, SaveRepairer, SeededMarkSelector,
    SuggestionRepairer,
};
use legalfix_core::ports::{Notifier, SlotView};
use legalfix_core::{
    ActiveOutcome, BulkOutcome, HelpChoice, LegalizeCommand, LegalizeWorkflow, Modifiers,
    RuleBook, Validator,
};
use legalfix_domain::EditContext;
use legalfix_types::{Ball, ReportMode, SaveFile};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Exit code when the active record could not be made legal.
const EXIT_BLOCKED: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "legalfix",
    version,
    about = "Validate and repair Pokémon records in a JSON save."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Legalize the active record, the current box (--control) or every box (--control --shift).
    Legalize(LegalizeArgs),
    /// Validate one record and print the report.
    Check(CheckArgs),
    /// List the ball table and the Legends: Arceus substitutions.
    Balls,
}

#[derive(Debug, Parser)]
struct LegalizeArgs {
    /// Save file (JSON).
    #[arg(long)]
    save: Utf8PathBuf,

    /// Rule book (JSON) the records are validated against.
    #[arg(long)]
    rules: Utf8PathBuf,

    /// Config file (default: legalfix.toml next to the save file).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Legalize the current box instead of the active record.
    #[arg(long, default_value_t = false)]
    control: bool,

    /// With --control, legalize every box.
    #[arg(long, default_value_t = false)]
    shift: bool,

    /// Box holding the active record (default: the save's current box).
    #[arg(long = "box")]
    box_idx: Option<usize>,

    /// Slot of the active record.
    #[arg(long, default_value_t = 0)]
    slot: usize,

    /// Write the repaired save back to disk. If omitted, nothing is written.
    #[arg(long, default_value_t = false)]
    write: bool,

    /// Follow-up to pick when the active record cannot be legalized.
    #[arg(long, value_enum, default_value = "dismiss")]
    on_failure: FailureAction,

    /// Use Hisui balls for Legends: Arceus records.
    #[arg(long, default_value_t = false)]
    la_balls: bool,

    /// Keep the current ball instead of picking one that matches the species colour.
    #[arg(long, default_value_t = false)]
    no_matching_ball: bool,

    /// Remove ribbons instead of granting every valid one.
    #[arg(long, default_value_t = false)]
    clear_ribbons: bool,

    /// Seed for mark selection.
    #[arg(long, env = "LEGALFIX_SEED")]
    seed: Option<u64>,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Save file (JSON).
    #[arg(long)]
    save: Utf8PathBuf,

    /// Rule book (JSON).
    #[arg(long)]
    rules: Utf8PathBuf,

    /// Box to read from (default: the save's current box).
    #[arg(long = "box")]
    box_idx: Option<usize>,

    #[arg(long, default_value_t = 0)]
    slot: usize,

    /// List passing checks too.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FailureAction {
    Help,
    Guide,
    Dismiss,
}

impl From<FailureAction> for HelpChoice {
    fn from(action: FailureAction) -> Self {
        match action {
            FailureAction::Help => HelpChoice::OpenHelpChannel,
            FailureAction::Guide => HelpChoice::OpenGuide,
            FailureAction::Dismiss => HelpChoice::Dismiss,
        }
    }
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Legalize(args) => cmd_legalize(args),
        Command::Check(args) => cmd_check(args),
        Command::Balls => {
            cmd_balls();
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints notices to stdout and failures to stderr; the failure answer is fixed up front.
struct ConsoleNotifier {
    answer: HelpChoice,
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }

    fn notify_error(&self, message: &str, detail: &str) -> HelpChoice {
        eprintln!("{message}\n{detail}");
        self.answer
    }
}

/// Remembers that the boxes changed so the listing is printed once at the end.
#[derive(Debug, Default)]
struct ConsoleView {
    reloads: usize,
}

impl SlotView for ConsoleView {
    fn reload_slots(&mut self) {
        self.reloads += 1;
    }
}

fn cmd_legalize(args: LegalizeArgs) -> anyhow::Result<ExitCode> {
    let file_config =
        config::load_or_default(args.config.as_deref(), &args.save).context("load legalfix.toml")?;
    let settings = ConfigMerger::new(file_config).merge_legalize_args(&LegalizeOverrides {
        replace_ball_prefix_la: args.la_balls,
        no_matching_ball: args.no_matching_ball,
        clear_ribbons: args.clear_ribbons,
        seed: args.seed,
    });
    debug!(?settings, "merged config");

    let mut save = load_save(&args.save)?;
    let book =
        RuleBook::load(&args.rules).with_context(|| format!("load rule book {}", args.rules))?;

    let validator = RuleBookValidator::new(&book);
    let matcher = ColorBallMatcher::new(&validator);
    let ribbons = RuleBookRibbons::new(&book);
    let marks = SeededMarkSelector::new(settings.mark_seed);
    let ctx = EditContext::new(&validator, &matcher, &ribbons, &marks, settings.edit);
    let repairer = SuggestionRepairer::new(&book, ctx, &settings);
    let notifier = ConsoleNotifier {
        answer: args.on_failure.into(),
    };
    let workflow = LegalizeWorkflow::new(&validator, &repairer, &notifier);

    let command = LegalizeCommand::from_modifiers(Modifiers {
        control: args.control,
        shift: args.shift,
    });
    debug!(?command, "dispatching");

    let (changed, code) = match command {
        LegalizeCommand::Active => {
            let box_idx = args.box_idx.unwrap_or(save.current_box);
            let working = save
                .slot_mut(box_idx, args.slot)
                .with_context(|| format!("box {box_idx} slot {} is empty", args.slot))?;
            match workflow.legalize_active(working)? {
                ActiveOutcome::AlreadyValid => {
                    println!("{} is already legal.", working.label());
                    (false, ExitCode::SUCCESS)
                }
                ActiveOutcome::Legalized => (true, ExitCode::SUCCESS),
                ActiveOutcome::RepairFailed { choice, .. } => {
                    if let Some(link) = choice.link(&settings.help) {
                        println!("{link}");
                    }
                    (false, ExitCode::from(EXIT_BLOCKED))
                }
            }
        }
        LegalizeCommand::CurrentGroup | LegalizeCommand::AllGroups => {
            let mut view = ConsoleView::default();
            let outcome = {
                let mut groups = SaveRepairer::new(&mut save, &repairer, &validator);
                if command == LegalizeCommand::AllGroups {
                    workflow.legalize_all_groups(&mut groups, &mut view)?
                } else {
                    workflow.legalize_current_group(&mut groups, &mut view)?
                }
            };
            if view.reloads > 0 {
                print_boxes(&save, &validator);
            }
            (outcome != BulkOutcome::NoChange, ExitCode::SUCCESS)
        }
    };

    if changed && args.write {
        write_json(&args.save, &save)?;
        info!("wrote {}", args.save);
    }
    Ok(code)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let save = load_save(&args.save)?;
    let book =
        RuleBook::load(&args.rules).with_context(|| format!("load rule book {}", args.rules))?;
    let validator = RuleBookValidator::new(&book);

    let box_idx = args.box_idx.unwrap_or(save.current_box);
    let pk = save
        .slot(box_idx, args.slot)
        .with_context(|| format!("box {box_idx} slot {} is empty", args.slot))?;
    let mode = if args.strict {
        ReportMode::Strict
    } else {
        ReportMode::Permissive
    };

    let report = validator.validate(pk, mode);
    debug!(
        mode = ?report.mode(),
        valid = report.valid(),
        violations = report.violations().count(),
        "checked {}",
        pk.label()
    );
    println!("{}", pk.label());
    println!("{}", report.render().trim_end());
    if report.valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_BLOCKED))
    }
}

fn cmd_balls() {
    for ball in Ball::ALL {
        match ball.arceus_variant() {
            Some(la) => println!("{:>2}  {:<18} -> {}", ball.index(), ball.name(), la.name()),
            None => println!("{:>2}  {}", ball.index(), ball.name()),
        }
    }
}

fn print_boxes(save: &SaveFile, validator: &dyn Validator) {
    for box_idx in 0..save.box_count() {
        let legal = save
            .occupied(box_idx)
            .filter(|(_, pk)| validator.validate(pk, ReportMode::Permissive).valid())
            .count();
        let occupied = save.occupied(box_idx).count();
        let marker = if box_idx == save.current_box { "*" } else { " " };
        println!("{marker}box {box_idx}: {legal}/{occupied} legal");
    }
}

fn load_save(path: &Utf8Path) -> anyhow::Result<SaveFile> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("parse save {}", path))
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}
