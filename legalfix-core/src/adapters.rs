//! Default port implementations backed by a [`RuleBook`].

use crate::error::{WorkflowError, WorkflowResult};
use crate::ports::{GroupRepairer, Notifier, RecordRepairer};
use crate::rulebook::RuleBook;
use crate::settings::LegalizeSettings;
use crate::workflow::HelpChoice;
use anyhow::Context;
use legalfix_domain::{
    BallMatcher, BallRequest, BattleTemplate, EditContext, Encounter, MarkSelector,
    RibbonApplicator, Validator, set_suggested_ball, set_suggested_ribbons, valid_ball,
};
use legalfix_types::report::{CheckIdentifier, CheckLine};
use legalfix_types::ribbons::{self, RibbonKind};
use legalfix_types::{Ball, Color, Mark, Pokemon, ReportMode, SaveFile, ValidationReport, checks};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::cell::RefCell;
use tracing::{debug, warn};

/// Validator that judges records against a rule book.
#[derive(Debug, Clone, Copy)]
pub struct RuleBookValidator<'a> {
    book: &'a RuleBook,
}

impl<'a> RuleBookValidator<'a> {
    pub fn new(book: &'a RuleBook) -> Self {
        Self { book }
    }

    fn check_ball(&self, pk: &Pokemon, enc: Option<&Encounter>) -> CheckLine {
        if let Some(enc) = enc
            && enc.forces_ball()
        {
            return if enc.balls.contains(&pk.ball) {
                CheckLine::valid(CheckIdentifier::Ball, checks::BALL_ENC)
            } else {
                CheckLine::invalid(CheckIdentifier::Ball, checks::BALL_ENC_MISMATCH)
            };
        }
        match self.book.species_rules(pk.species) {
            Some(rules) if rules.balls.contains(&pk.ball) => {
                CheckLine::valid(CheckIdentifier::Ball, checks::BALL_SPECIES_PASS)
            }
            Some(_) => CheckLine::invalid(CheckIdentifier::Ball, checks::BALL_SPECIES),
            None => CheckLine::invalid(CheckIdentifier::Ball, checks::BALL_NONE),
        }
    }

    fn check_ribbons(&self, pk: &Pokemon, enc: Option<&Encounter>) -> Vec<CheckLine> {
        let allowed = self.book.allowed_ribbons(pk);
        let allowed_marks: Vec<&str> = enc
            .map(|e| e.marks.iter().map(|m| m.ribbon_name()).collect())
            .unwrap_or_default();

        let mut bad_ribbons = Vec::new();
        let mut bad_marks = Vec::new();
        for name in pk.ribbons.names() {
            let is_mark = ribbons::lookup(name).is_some_and(|f| f.kind == RibbonKind::Mark);
            if is_mark {
                if !allowed_marks.contains(&name) {
                    bad_marks.push(name);
                }
            } else if !allowed.contains(&name) {
                bad_ribbons.push(name);
            }
        }

        let mut out = Vec::new();
        if pk.ribbons.marks().next().is_some() && !pk.supports_marks() {
            out.push(CheckLine::invalid(
                CheckIdentifier::Mark,
                checks::MARK_UNSUPPORTED,
            ));
        }
        if !bad_ribbons.is_empty() {
            out.push(CheckLine::invalid(
                CheckIdentifier::Ribbon,
                format!("{} {}", checks::RIBBON_INVALID, bad_ribbons.join(", ")),
            ));
        }
        if !bad_marks.is_empty() {
            out.push(CheckLine::invalid(
                CheckIdentifier::Mark,
                format!("{} {}", checks::RIBBON_INVALID, bad_marks.join(", ")),
            ));
        }
        if out.is_empty() {
            out.push(CheckLine::valid(
                CheckIdentifier::Ribbon,
                checks::RIBBON_ALL_VALID,
            ));
        }
        out
    }
}

impl Validator for RuleBookValidator<'_> {
    fn validate(&self, pk: &Pokemon, mode: ReportMode) -> ValidationReport {
        let enc = self.book.encounter_for(pk);
        let mut lines = Vec::with_capacity(4);
        lines.push(match enc {
            Some(_) => CheckLine::valid(CheckIdentifier::Encounter, checks::ENCOUNTER_MATCH),
            None => CheckLine::invalid(CheckIdentifier::Encounter, checks::ENCOUNTER_INVALID),
        });
        lines.push(self.check_ball(pk, enc));
        lines.extend(self.check_ribbons(pk, enc));
        ValidationReport::from_checks(lines, mode)
    }
}

/// Picks balls whose look matches the species colour.
///
/// Candidates are tried in order; the first one the validator accepts wins. When none is
/// accepted the record's current ball is kept.
#[derive(Clone, Copy)]
pub struct ColorBallMatcher<'a> {
    validator: &'a dyn Validator,
}

const SHINY_BALLS: &[Ball] = &[Ball::Cherish, Ball::Premier, Ball::Luxury, Ball::Dream];

impl<'a> ColorBallMatcher<'a> {
    pub fn new(validator: &'a dyn Validator) -> Self {
        Self { validator }
    }

    pub fn color_balls(color: Color) -> &'static [Ball] {
        match color {
            Color::Red => &[Ball::Cherish, Ball::Repeat, Ball::Fast, Ball::Heal, Ball::Great, Ball::Dream, Ball::Lure],
            Color::Blue => &[Ball::Dive, Ball::Net, Ball::Great, Ball::Lure, Ball::Beast],
            Color::Yellow => &[Ball::Level, Ball::Ultra, Ball::Repeat, Ball::Quick, Ball::Moon],
            Color::Green => &[Ball::Safari, Ball::Friend, Ball::Nest, Ball::Dusk],
            Color::Black => &[Ball::Luxury, Ball::Heavy, Ball::Ultra, Ball::Moon, Ball::Net, Ball::Beast],
            Color::Brown => &[Ball::Level, Ball::Heavy],
            Color::Purple => &[Ball::Master, Ball::Love, Ball::Dream, Ball::Heal],
            Color::Gray => &[Ball::Heavy, Ball::Premier, Ball::Luxury],
            Color::White => &[Ball::Premier, Ball::Timer, Ball::Luxury, Ball::Ultra],
            Color::Pink => &[Ball::Love, Ball::Dream, Ball::Heal],
        }
    }

    fn first_valid<'b>(&self, pk: &Pokemon, candidates: impl Iterator<Item = &'b Ball>) -> Ball {
        let mut probe = pk.clone();
        for ball in candidates {
            probe.ball = *ball;
            if valid_ball(&probe, self.validator) {
                return *ball;
            }
        }
        pk.ball
    }
}

impl BallMatcher for ColorBallMatcher<'_> {
    fn matching_ball(&self, pk: &Pokemon) -> Ball {
        self.first_valid(pk, Self::color_balls(pk.color).iter())
    }

    fn matching_shiny_ball(&self, pk: &Pokemon) -> Ball {
        self.first_valid(pk, SHINY_BALLS.iter().chain(Self::color_balls(pk.color)))
    }
}

/// Ribbon applicator that grants every ribbon the rule book allows.
#[derive(Debug, Clone, Copy)]
pub struct RuleBookRibbons<'a> {
    book: &'a RuleBook,
}

impl<'a> RuleBookRibbons<'a> {
    pub fn new(book: &'a RuleBook) -> Self {
        Self { book }
    }
}

impl RibbonApplicator for RuleBookRibbons<'_> {
    fn set_all_valid_ribbons(&self, pk: &mut Pokemon) {
        let allowed = self.book.allowed_ribbons(pk);
        let allowed_marks: Vec<&str> = self
            .book
            .encounter_for(pk)
            .map(|e| e.marks.iter().map(|m| m.ribbon_name()).collect())
            .unwrap_or_default();
        let stale: Vec<String> = pk
            .ribbons
            .names()
            .filter(|n| !allowed.contains(n) && !allowed_marks.contains(n))
            .map(str::to_string)
            .collect();
        let result = pk
            .ribbons
            .set_ribbon_values(stale.iter().map(String::as_str), 0, false)
            .and_then(|()| pk.ribbons.set_ribbon_values(allowed, 1, true));
        if let Err(e) = result {
            warn!(species = pk.species, error = %e, "could not apply ribbons");
        }
    }

    fn clear_all_valid_ribbons(&self, pk: &mut Pokemon) {
        if let Err(e) = pk.ribbons.set_ribbon_values(ribbons::ribbon_names("Ribbon"), 0, false) {
            warn!(species = pk.species, error = %e, "could not clear ribbons");
        }
    }
}

/// Mark selector drawing from the encounter's mark list.
///
/// Single-threaded by design of the workflow; the generator sits behind a `RefCell`.
#[derive(Debug)]
pub struct SeededMarkSelector {
    rng: RefCell<StdRng>,
}

impl SeededMarkSelector {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl MarkSelector for SeededMarkSelector {
    /// A template naming another species or form gets no mark, as does a record that already
    /// carries one. A template with species 0 places no constraint.
    fn random_valid_mark(
        &self,
        pk: &Pokemon,
        set: &BattleTemplate,
        enc: &Encounter,
    ) -> Option<Mark> {
        if set.species != 0 && (set.species != pk.species || set.form != pk.form) {
            debug!(
                requested = set.species,
                record = %pk.label(),
                "template does not fit record, no mark"
            );
            return None;
        }
        if pk.ribbons.marks().next().is_some() {
            return None;
        }
        enc.marks.choose(&mut *self.rng.borrow_mut()).copied()
    }
}

/// Single-record repairer built from the suggestion edits.
pub struct SuggestionRepairer<'a> {
    book: &'a RuleBook,
    ctx: EditContext<'a>,
    settings: &'a LegalizeSettings,
}

impl<'a> SuggestionRepairer<'a> {
    pub fn new(book: &'a RuleBook, ctx: EditContext<'a>, settings: &'a LegalizeSettings) -> Self {
        Self {
            book,
            ctx,
            settings,
        }
    }

    fn template_for(pk: &Pokemon) -> BattleTemplate {
        BattleTemplate {
            species: pk.species,
            form: pk.form,
            nickname: pk.nickname.clone(),
            shiny: pk.is_shiny,
            ball: pk.ball,
        }
    }
}

impl RecordRepairer for SuggestionRepairer<'_> {
    fn repair(&self, pk: &Pokemon) -> anyhow::Result<Pokemon> {
        let mut candidate = pk.clone();
        let Some(enc) = self.book.encounter_for(pk) else {
            debug!(record = %pk.label(), "no encounter in rule book, leaving record as is");
            return Ok(candidate);
        };

        let req = match enc.balls.first() {
            Some(ball) => BallRequest::explicit(*ball),
            None => BallRequest {
                matching: self.settings.matching_ball,
                ..BallRequest::default()
            },
        };
        set_suggested_ball(&mut candidate, req, &self.ctx);

        let set = Self::template_for(pk);
        set_suggested_ribbons(
            &mut candidate,
            &set,
            enc,
            self.settings.all_valid_ribbons,
            &self.ctx,
        );
        Ok(candidate)
    }
}

/// Bulk repairer over a save's boxes.
pub struct SaveRepairer<'a> {
    save: &'a mut SaveFile,
    repairer: &'a dyn RecordRepairer,
    validator: &'a dyn Validator,
}

impl<'a> SaveRepairer<'a> {
    pub fn new(
        save: &'a mut SaveFile,
        repairer: &'a dyn RecordRepairer,
        validator: &'a dyn Validator,
    ) -> Self {
        Self {
            save,
            repairer,
            validator,
        }
    }

    /// Repair every invalid slot of one box without touching the save.
    ///
    /// Only candidates that re-validate are returned.
    fn stage_box(&self, group: usize) -> anyhow::Result<Vec<(usize, Pokemon)>> {
        let mut staged = Vec::new();
        for (slot, pk) in self.save.occupied(group) {
            if self.validator.validate(pk, ReportMode::Permissive).valid() {
                continue;
            }
            let candidate = self
                .repairer
                .repair(pk)
                .with_context(|| format!("repair box {group} slot {slot}"))?;
            if self.validator.validate(&candidate, ReportMode::Permissive).valid() {
                staged.push((slot, candidate));
            } else {
                debug!(group, slot, record = %pk.label(), "could not legalize slot");
            }
        }
        Ok(staged)
    }

    fn commit(&mut self, group: usize, staged: Vec<(usize, Pokemon)>) -> usize {
        let mut count = 0;
        for (slot, candidate) in staged {
            if let Some(pk) = self.save.slot_mut(group, slot) {
                *pk = candidate;
                count += 1;
            }
        }
        count
    }
}

// Every box is staged before anything is written back, so a repairer error leaves the save
// exactly as it was.
impl GroupRepairer for SaveRepairer<'_> {
    fn current_group(&self) -> usize {
        self.save.current_box
    }

    fn legalize_group(&mut self, group: usize) -> WorkflowResult<usize> {
        let count = self.save.box_count();
        if group >= count {
            return Err(WorkflowError::NoSuchGroup { group, count });
        }
        let staged = self.stage_box(group)?;
        Ok(self.commit(group, staged))
    }

    fn legalize_all_groups(&mut self) -> WorkflowResult<usize> {
        let staged = (0..self.save.box_count())
            .map(|group| self.stage_box(group).map(|s| (group, s)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(staged
            .into_iter()
            .map(|(group, s)| self.commit(group, s))
            .sum())
    }
}

/// Notifier that records notices in memory and answers errors with a preset choice.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    answer: HelpChoice,
    notices: RefCell<Vec<String>>,
    errors: RefCell<Vec<(String, String)>>,
}

impl BufferedNotifier {
    pub fn answering(answer: HelpChoice) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.borrow().clone()
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn notify_error(&self, message: &str, detail: &str) -> HelpChoice {
        self.errors
            .borrow_mut()
            .push((message.to_string(), detail.to_string()));
        self.answer
    }
}
