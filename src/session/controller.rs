//! The session controller.
//!
//! `Session` owns the grid, the match engine, the round timer and the
//! scheduler, and is the only thing the host talks to:
//!
//! - `on_card_activated(position)` when the player picks a cell
//! - `tick()` once per timer period
//! - `drain_events()` / `snapshot()` to render
//!
//! Events queue up until drained. Hosts should drain after every input and
//! tick; consecutive `TimerTicked` events are folded into one so a host that
//! only renders from `snapshot()` does not accumulate one event per tick.
//!
//! All input is processed sequentially on the caller's thread; no locking
//! is involved. Once the round has ended every input is ignored.
//!
//! ## Example
//!
//! ```
//! use concentration::core::{Position, RoundConfig};
//! use concentration::session::Session;
//!
//! let mut session = Session::start(RoundConfig::default().with_duration(5)).unwrap();
//! session.on_card_activated(Position::new(0));
//! session.advance(5);
//!
//! assert!(session.is_ended());
//! assert_eq!(session.remaining_time().raw(), 0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::event::{EndReason, RoundSummary, SessionEvent};
use super::snapshot::RoundSnapshot;
use crate::cards::{Card, Deck, Grid, Palette};
use crate::core::{ConfigResult, GameRng, GameRngState, Position, RoundConfig, Ticks};
use crate::rules::{MatchEngine, PairingState, Resolution};
use crate::timer::{RoundTimer, ScheduledTask, Scheduler, TimerTick};

/// A mismatched pair waiting to be turned back over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReset {
    pub first: Position,
    pub second: Position,
    /// Mismatch sequence number within the round. Carried into the
    /// `MismatchFound` and `CardsReset` events so hosts can pair them.
    pub generation: u64,
}

/// One player's game: a sequence of rounds over the same configuration.
#[derive(Clone, Debug)]
pub struct Session {
    config: RoundConfig,
    palette: Palette,
    rng: GameRng,
    round: u64,
    grid: Grid,
    engine: MatchEngine,
    timer: RoundTimer,
    scheduler: Scheduler<PendingReset>,
    summary: Option<RoundSummary>,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Validate `config`, deal a board from a numbered palette and start
    /// the clock.
    pub fn start(config: RoundConfig) -> ConfigResult<Self> {
        let palette = Palette::numbered(config.palette_size);
        Self::with_palette(config, palette)
    }

    /// Like `start`, dealing from an explicit palette.
    ///
    /// The palette's length replaces `config.palette_size`.
    pub fn with_palette(mut config: RoundConfig, palette: Palette) -> ConfigResult<Self> {
        config.palette_size = palette.len();
        config.validate()?;

        let mut rng = GameRng::new(config.seed).for_context("deal");
        let deck = Deck::build(config.rows, config.columns, &palette, &mut rng)?;
        let engine = MatchEngine::new(deck.pairs() as u32, config.match_reward);
        let timer = RoundTimer::new(config.round_duration);

        info!(
            rows = config.rows,
            columns = config.columns,
            pairs = deck.pairs(),
            duration = %config.round_duration,
            seed = config.seed,
            "round started"
        );

        Ok(Self {
            grid: Grid::from_deck(&deck),
            config,
            palette,
            rng,
            round: 1,
            engine,
            timer,
            scheduler: Scheduler::new(),
            summary: None,
            events: Vec::new(),
        })
    }

    /// Deal a fresh board with the same configuration and restart the clock.
    ///
    /// Resets still queued from the previous round are cancelled. Undrained
    /// events are kept.
    pub fn restart(&mut self) -> ConfigResult<()> {
        let deck = Deck::build(self.config.rows, self.config.columns, &self.palette, &mut self.rng)?;
        let cancelled = self.scheduler.cancel_all();

        self.round += 1;
        self.grid = Grid::from_deck(&deck);
        self.engine = MatchEngine::new(deck.pairs() as u32, self.config.match_reward);
        self.timer = RoundTimer::new(self.config.round_duration);
        self.summary = None;

        info!(round = self.round, cancelled, "round restarted");
        Ok(())
    }

    /// The player picked the card at `position`.
    ///
    /// Returns `false` when the selection was ignored: the round is over,
    /// the position is off the board, or the card is already revealed.
    pub fn on_card_activated(&mut self, position: Position) -> bool {
        if self.is_ended() {
            trace!(%position, "round over, selection ignored");
            return false;
        }
        let Some(card) = self.grid.get_mut(position) else {
            trace!(%position, "selection off the board ignored");
            return false;
        };
        let Some(selection) = card.select() else {
            trace!(%position, face = ?card.face(), "selection on revealed card ignored");
            return false;
        };

        debug!(%position, identity = %selection.identity, "card flipped");
        self.events.push(SessionEvent::CardFlipped {
            position,
            identity: selection.identity,
        });

        match self.engine.submit(selection, &mut self.grid) {
            Resolution::Pending => {}
            Resolution::Matched {
                first,
                second,
                identity,
            } => {
                self.events.push(SessionEvent::MatchFound {
                    first,
                    second,
                    identity,
                    score: self.engine.score(),
                });
                if self.engine.is_complete() {
                    self.finish(EndReason::AllPairsMatched);
                }
            }
            Resolution::Mismatched {
                first,
                second,
                generation,
            } => {
                self.events.push(SessionEvent::MismatchFound {
                    first,
                    second,
                    generation,
                });
                let task = self.scheduler.schedule(
                    self.config.mismatch_delay,
                    self.round,
                    PendingReset {
                        first,
                        second,
                        generation,
                    },
                );
                debug!(%task, generation, delay = %self.config.mismatch_delay, "mismatch reset scheduled");
            }
        }
        true
    }

    /// Advance time by one quantum.
    ///
    /// Due mismatch resets run first, then the round timer counts down.
    pub fn tick(&mut self) {
        if self.is_ended() {
            trace!("round over, tick ignored");
            return;
        }

        self.scheduler.advance();
        for task in self.scheduler.take_due() {
            self.run_reset(task);
        }

        match self.timer.tick() {
            TimerTick::Inert => {}
            TimerTick::Ticked { remaining } => self.push_timer(remaining),
            TimerTick::Expired => {
                self.push_timer(Ticks::ZERO);
                self.finish(EndReason::TimeExpired);
            }
        }
    }

    /// Record a clock change, folding it into an undrained `TimerTicked`
    /// at the back of the queue.
    fn push_timer(&mut self, remaining: Ticks) {
        if let Some(SessionEvent::TimerTicked { remaining: last }) = self.events.last_mut() {
            *last = remaining;
            return;
        }
        self.events.push(SessionEvent::TimerTicked { remaining });
    }

    /// Call `tick` up to `ticks` times, stopping early if the round ends.
    pub fn advance(&mut self, ticks: u32) {
        for _ in 0..ticks {
            if self.is_ended() {
                break;
            }
            self.tick();
        }
    }

    fn run_reset(&mut self, task: ScheduledTask<PendingReset>) {
        if task.round != self.round {
            trace!(task = %task.id, round = task.round, current = self.round, "stale reset dropped");
            return;
        }

        let PendingReset {
            first,
            second,
            generation,
        } = task.payload;
        let mut flipped = false;
        for position in [first, second] {
            if let Some(card) = self.grid.get_mut(position) {
                flipped |= card.reset_face();
            }
        }

        if flipped {
            debug!(%first, %second, generation, "mismatched pair reset");
            self.events.push(SessionEvent::CardsReset {
                first,
                second,
                generation,
            });
        }
    }

    fn finish(&mut self, reason: EndReason) {
        if self.summary.is_some() {
            return;
        }

        self.timer.stop();
        let cancelled = self.scheduler.cancel_all();
        let summary = RoundSummary {
            reason,
            score: self.engine.score(),
            matched_pairs: self.engine.matched_pairs(),
            total_pairs: self.engine.total_pairs(),
            remaining: self.timer.remaining(),
        };

        info!(
            round = self.round,
            ?reason,
            score = summary.score,
            matched = summary.matched_pairs,
            total = summary.total_pairs,
            remaining = %summary.remaining,
            cancelled,
            "round ended"
        );
        self.events.push(SessionEvent::RoundEnded(summary.clone()));
        self.summary = Some(summary);
    }

    // === Observable state ===

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Round generation, starting at 1 and bumped by `restart`.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.engine.matched_pairs()
    }

    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.engine.total_pairs()
    }

    #[must_use]
    pub fn remaining_time(&self) -> Ticks {
        self.timer.remaining()
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn clock_display(&self) -> String {
        self.timer.clock_display()
    }

    /// Ticks elapsed since the session started.
    #[must_use]
    pub fn now(&self) -> Ticks {
        self.scheduler.now()
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.summary.is_some()
    }

    /// Final result, once the round has ended.
    #[must_use]
    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn card(&self, position: Position) -> Option<&Card> {
        self.grid.get(position)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn pairing_state(&self) -> PairingState {
        self.engine.state()
    }

    /// Mismatched pairs still waiting to flip back.
    #[must_use]
    pub fn pending_resets(&self) -> usize {
        self.scheduler.pending()
    }

    /// Checkpoint of the deal stream; the next `restart` deals from this state.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Events emitted since the last drain, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cheap copy of everything needed to render the round.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round,
            rows: self.grid.rows(),
            columns: self.grid.columns(),
            cards: self.grid.cards().clone(),
            score: self.engine.score(),
            matched_pairs: self.engine.matched_pairs(),
            total_pairs: self.engine.total_pairs(),
            remaining: self.timer.remaining(),
            ended: self.is_ended(),
            summary: self.summary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardFace, CardIdentity};
    use crate::core::ConfigError;
    use crate::timer::TaskId;

    fn positions_of(session: &Session, identity: CardIdentity) -> Vec<Position> {
        session
            .grid()
            .iter()
            .filter(|card| card.identity == identity)
            .map(|card| card.position)
            .collect()
    }

    fn small() -> Session {
        Session::start(RoundConfig::default().with_grid(2, 2).with_palette_size(2)).unwrap()
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let err = Session::start(RoundConfig::default().with_grid(3, 3)).unwrap_err();
        assert_eq!(err, ConfigError::OddCardCount { rows: 3, columns: 3, cells: 9 });
    }

    #[test]
    fn test_custom_palette() {
        let palette: Palette = [40, 41].into_iter().map(CardIdentity::new).collect();
        let session = Session::with_palette(RoundConfig::default().with_grid(2, 2), palette).unwrap();

        assert_eq!(session.config().palette_size, 2);
        assert_eq!(positions_of(&session, CardIdentity::new(40)).len(), 2);
        assert_eq!(positions_of(&session, CardIdentity::new(41)).len(), 2);
    }

    #[test]
    fn test_match_emits_events() {
        let mut session = small();
        let a = positions_of(&session, CardIdentity::new(0));

        assert!(session.on_card_activated(a[0]));
        assert!(matches!(
            session.pairing_state(),
            PairingState::OneSelected(selection) if selection.position == a[0]
        ));
        assert!(session.on_card_activated(a[1]));

        let kinds: Vec<_> = session.drain_events().iter().map(SessionEvent::kind).collect();
        assert_eq!(kinds, vec!["card_flipped", "card_flipped", "match_found"]);
        assert_eq!(session.score(), 10);
        assert!(!session.is_ended());
    }

    #[test]
    fn test_mismatch_resets_after_delay() {
        let mut session = Session::start(
            RoundConfig::default()
                .with_grid(2, 2)
                .with_palette_size(2)
                .with_mismatch_delay(2),
        )
        .unwrap();
        let a = positions_of(&session, CardIdentity::new(0));
        let b = positions_of(&session, CardIdentity::new(1));

        session.on_card_activated(a[0]);
        session.on_card_activated(b[0]);
        assert_eq!(session.pending_resets(), 1);

        session.tick();
        assert!(session.card(a[0]).unwrap().is_face_up());

        session.tick();
        assert_eq!(session.card(a[0]).unwrap().face(), CardFace::FaceDown);
        assert_eq!(session.card(b[0]).unwrap().face(), CardFace::FaceDown);
        assert_eq!(session.pending_resets(), 0);
        assert!(session.events().contains(&SessionEvent::CardsReset {
            first: a[0],
            second: b[0],
            generation: 1,
        }));
    }

    #[test]
    fn test_restart_drops_stale_reset() {
        let mut session = small();
        let a = positions_of(&session, CardIdentity::new(0));
        let b = positions_of(&session, CardIdentity::new(1));
        session.on_card_activated(a[0]);
        session.on_card_activated(b[0]);

        session.restart().unwrap();
        assert_eq!(session.round(), 2);
        assert_eq!(session.pending_resets(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.grid().iter().all(Card::is_selectable));

        // A card flipped in the new round is not touched by the old reset.
        session.on_card_activated(Position::new(0));
        session.drain_events();
        session.tick();
        assert!(session.card(Position::new(0)).unwrap().is_face_up());
    }

    #[test]
    fn test_reset_from_older_round_is_dropped() {
        let mut session = small();
        let a = positions_of(&session, CardIdentity::new(0));
        let b = positions_of(&session, CardIdentity::new(1));
        session.on_card_activated(a[0]);
        session.on_card_activated(b[0]);
        session.drain_events();

        let stale = ScheduledTask {
            id: TaskId(99),
            due: Ticks::ZERO,
            round: session.round() - 1,
            payload: PendingReset {
                first: a[0],
                second: b[0],
                generation: 1,
            },
        };
        session.run_reset(stale);

        assert!(session.card(a[0]).unwrap().is_face_up());
        assert!(session.card(b[0]).unwrap().is_face_up());
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_reset_from_current_round_applies() {
        let mut session = small();
        let a = positions_of(&session, CardIdentity::new(0));
        let b = positions_of(&session, CardIdentity::new(1));
        session.on_card_activated(a[0]);
        session.on_card_activated(b[0]);
        session.drain_events();

        let current = ScheduledTask {
            id: TaskId(99),
            due: Ticks::ZERO,
            round: session.round(),
            payload: PendingReset {
                first: a[0],
                second: b[0],
                generation: 1,
            },
        };
        session.run_reset(current);

        assert!(session.card(a[0]).unwrap().is_selectable());
        assert_eq!(session.events().len(), 1);
    }

    #[test]
    fn test_timer_ticks_fold_until_drained() {
        let mut session = small();
        session.advance(10);

        assert_eq!(
            session.events(),
            &[SessionEvent::TimerTicked {
                remaining: Ticks::new(110),
            }]
        );

        session.drain_events();
        session.on_card_activated(Position::new(0));
        session.tick();
        let kinds: Vec<_> = session.events().iter().map(SessionEvent::kind).collect();
        assert_eq!(kinds, vec!["card_flipped", "timer_ticked"]);
    }

    #[test]
    fn test_off_board_selection_ignored() {
        let mut session = small();
        assert!(!session.on_card_activated(Position::new(4)));
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_snapshot_tracks_state() {
        let mut session = small();
        session.on_card_activated(Position::new(1));
        let snapshot = session.snapshot();

        assert_eq!(snapshot.rows, 2);
        assert_eq!(snapshot.card(Position::new(1)).unwrap().face(), CardFace::FaceUp);
        assert_eq!(snapshot.faces().filter(|&f| f == CardFace::FaceDown).count(), 3);
        assert!(!snapshot.ended);
        assert_eq!(snapshot.remaining, Ticks::new(120));
    }
}
