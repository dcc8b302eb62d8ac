//! Shot-selection strategies and the fallback chain that composes them.
//!
//! Policies do not inherit from each other. A [`ShotSelector`] owns the
//! shared margined field plus an ordered list of policies and walks the list
//! until one proposes a shot; a policy abstains with `Ok(None)`. The dummy
//! terminus converts a fully exhausted field into `Failure`, so abstention
//! never escapes to the caller.

pub mod dummy;
pub mod eclipsed;
pub mod field_mask;
pub mod random;

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::common::{ShotApplied, ShotResult, StepError};
use crate::config::ALL_SHIPS_COUNT;
use crate::coords::Coords;
use crate::game::TurnState;
use crate::grid::CellState;
use crate::hints::ShotHints;
use crate::params::{CustomParams, ParamsError};
use crate::tracker::TargetField;

pub use dummy::DummyPolicy;
pub use eclipsed::EclipsedPolicy;
pub use field_mask::FieldMaskPolicy;
pub use random::RandomPolicy;

/// One stage of a shot-selection chain.
///
/// `Ok(None)` means "no guess": the policy abstains and the selector falls
/// through to the next stage.
pub trait ShotPolicy: Send {
    fn name(&self) -> &'static str;

    fn propose(
        &mut self,
        state: &TurnState,
        target: &TargetField,
        rng: &mut SmallRng,
        hints: Option<&mut ShotHints>,
    ) -> Result<Option<Coords>, StepError>;

    /// Independent copy with pristine per-game state.
    fn fresh(&self) -> Box<dyn ShotPolicy>;
}

/// Selectable strategy families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Dummy,
    Random,
    FieldMask,
    Eclipsed,
    Mixed,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Dummy,
        StrategyKind::Random,
        StrategyKind::FieldMask,
        StrategyKind::Eclipsed,
        StrategyKind::Mixed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Dummy => "dummy",
            StrategyKind::Random => "random",
            StrategyKind::FieldMask => "field-mask",
            StrategyKind::Eclipsed => "eclipsed",
            StrategyKind::Mixed => "mixed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A configured shot-selection chain plus the margined field it shares.
pub struct ShotSelector {
    kind: StrategyKind,
    target: TargetField,
    chain: Vec<Box<dyn ShotPolicy>>,
}

impl ShotSelector {
    /// Selector with default configuration.
    pub fn new(kind: StrategyKind) -> Self {
        let mut params = CustomParams::default();
        // an empty parameter set cannot fail to apply
        let chain = Self::build_chain(kind, &mut params).unwrap_or_default();
        Self {
            kind,
            target: TargetField::new(),
            chain,
        }
    }

    /// Selector with strategy-specific custom parameters applied.
    pub fn with_params(kind: StrategyKind, params: &str) -> Result<Self, ParamsError> {
        let mut params = CustomParams::parse(params)?;
        let chain = Self::build_chain(kind, &mut params)?;
        params.finish()?;
        Ok(Self {
            kind,
            target: TargetField::new(),
            chain,
        })
    }

    /// The fallback order each kind expands to. Every chain ends in the dummy
    /// policy, and every non-dummy chain falls back through random first.
    fn build_chain(
        kind: StrategyKind,
        params: &mut CustomParams,
    ) -> Result<Vec<Box<dyn ShotPolicy>>, ParamsError> {
        let mut chain: Vec<Box<dyn ShotPolicy>> = Vec::new();
        match kind {
            StrategyKind::Dummy | StrategyKind::Random => {}
            StrategyKind::FieldMask => chain.push(Box::new(FieldMaskPolicy::new())),
            StrategyKind::Eclipsed => chain.push(Box::new(EclipsedPolicy::with_params(params)?)),
            StrategyKind::Mixed => {
                chain.push(Box::new(FieldMaskPolicy::new()));
                chain.push(Box::new(EclipsedPolicy::with_params(params)?));
            }
        }
        if kind != StrategyKind::Dummy {
            chain.push(Box::new(RandomPolicy::new()));
        }
        chain.push(Box::new(DummyPolicy::new()));
        Ok(chain)
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Read access to the margined field, mainly for inspection and tests.
    pub fn target(&self) -> &TargetField {
        &self.target
    }

    /// Independent selector for a new game: fresh margined field, pristine
    /// policy state, same configuration. One configured prototype can seed
    /// arbitrarily many concurrent games this way.
    pub fn fresh_game(&self) -> ShotSelector {
        ShotSelector {
            kind: self.kind,
            target: TargetField::new(),
            chain: self.chain.iter().map(|p| p.fresh()).collect(),
        }
    }

    /// Choose the next cell to probe.
    ///
    /// A pending harmed ship always takes priority. Otherwise the chain is
    /// walked in order until a stage proposes. Calling this after all ships
    /// are killed is caller misuse and yields Failure.
    pub fn get_next_shot(
        &mut self,
        state: &TurnState,
        rng: &mut SmallRng,
        mut hints: Option<&mut ShotHints>,
    ) -> Result<Coords, StepError> {
        if state.killed_ships >= ALL_SHIPS_COUNT {
            return Err(StepError::failure("all ships are already killed"));
        }

        if self.target.has_harmed_ship() {
            return self.target.finishing_shot(rng, hints);
        }

        for policy in self.chain.iter_mut() {
            match policy.propose(state, &self.target, rng, hints.as_deref_mut())? {
                Some(coords) => {
                    log::trace!("{} chose {}", policy.name(), coords);
                    return Ok(coords);
                }
                None => log::debug!("{} has no guess, falling through", policy.name()),
            }
        }

        // the dummy terminus either proposes or fails, so an empty walk means
        // the chain itself was not built
        Err(StepError::internal("strategy chain produced no shot"))
    }

    /// Record the referee's verdict for `coords` on both the shared revealed
    /// grid and the margined field. The kill counters in `state` must already
    /// reflect this shot; when the last ship just went down this returns
    /// `Won` without touching the grids.
    pub fn apply_shot_result(
        &mut self,
        state: &mut TurnState,
        coords: Coords,
        res: ShotResult,
    ) -> Result<ShotApplied, StepError> {
        if res == ShotResult::Killed && state.killed_ships >= ALL_SHIPS_COUNT {
            return Ok(ShotApplied::Won);
        }

        let killed_run = self.target.apply_shot_result(coords, res)?;
        match res {
            ShotResult::Missed => state.field.set(coords, CellState::Missed),
            ShotResult::Harmed => state.field.set(coords, CellState::Harmed),
            ShotResult::Killed => {
                if let Some(run) = killed_run {
                    for c in run.cells() {
                        state.field.set(c, CellState::Killed);
                    }
                }
            }
        }
        Ok(ShotApplied::Continue)
    }
}
