use crate::ports::Validator;
use crate::settings::EditContext;
use legalfix_types::{Ball, Pokemon, ReportMode, checks};
use tracing::debug;

/// How `set_suggested_ball` should pick a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallRequest {
    /// Pick a cosmetically matching ball when no explicit ball is given.
    pub matching: bool,
    /// Keep the assigned ball even if it fails validation, and always normalize afterwards.
    pub force: bool,
    /// Explicit ball; `Ball::None` means unspecified.
    pub ball: Ball,
}

impl Default for BallRequest {
    fn default() -> Self {
        Self {
            matching: true,
            force: false,
            ball: Ball::None,
        }
    }
}

impl BallRequest {
    pub fn explicit(ball: Ball) -> Self {
        Self {
            ball,
            ..Self::default()
        }
    }

    pub fn forced(ball: Ball) -> Self {
        Self {
            ball,
            force: true,
            ..Self::default()
        }
    }
}

/// Assign a ball to `pk`, then normalize it if it still conflicts with the encounter.
///
/// 1. An explicit ball is assigned (Hisui-substituted for Legends: Arceus records when
///    enabled). Without `force` it is rolled back when the ball check does not pass.
/// 2. Otherwise, with `matching`, the matcher's suggestion is assigned; shiny records use
///    the shiny suggestion.
/// 3. The record is re-validated. When the report still carries the encounter mismatch, or
///    when `force` is set, the ball becomes Dream for Dream World records and Poke otherwise.
///
/// Step 3 runs even after a successful assignment in step 1.
pub fn set_suggested_ball(pk: &mut Pokemon, req: BallRequest, ctx: &EditContext<'_>) {
    let replace_prefix = ctx.settings.replace_ball_prefix_la;

    if req.ball != Ball::None {
        let orig = pk.ball;
        let mut ball = req.ball;
        if pk.arceus_origin
            && replace_prefix
            && let Some(variant) = ball.arceus_variant()
        {
            debug!(from = %ball, to = %variant, "substituting hisui ball");
            ball = variant;
        }
        pk.ball = ball;
        if !req.force && !valid_ball(pk, ctx.validator) {
            debug!(rejected = %ball, kept = %orig, "ball failed validation, rolling back");
            pk.ball = orig;
        }
    } else if req.matching {
        pk.ball = if pk.is_shiny {
            ctx.balls.matching_shiny_ball(pk)
        } else {
            ctx.balls.matching_ball(pk)
        };
        debug!(ball = %pk.ball, shiny = pk.is_shiny, "assigned matching ball");
    }

    let report = ctx.validator.validate(pk, ReportMode::Permissive);
    if !report.contains(checks::BALL_ENC_MISMATCH) && !req.force {
        return;
    }

    let fallback = if pk.is_dream_world() {
        Ball::Dream
    } else {
        Ball::DEFAULT
    };
    debug!(from = %pk.ball, to = %fallback, force = req.force, "normalizing ball");
    pk.ball = fallback;
}

/// True when a strict report accepts the ball by encounter or by species.
pub fn valid_ball(pk: &Pokemon, validator: &dyn Validator) -> bool {
    let report = validator.validate(pk, ReportMode::Strict);
    report.contains(checks::BALL_ENC) || report.contains(checks::BALL_SPECIES_PASS)
}
