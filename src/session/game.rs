//! A single player's session against the computer opponent.

use crate::core::{
    Alphabet, Choice, Difficulty, EngineConfig, GameRng, PlayMode, RandomSource, Result, SessionState,
};
use crate::opponent::choose_opponent_move;
use crate::rules::resolve;

use super::match_play::MatchState;
use super::outcome::{MatchProgress, RoundOutcome};
use super::scoreboard::{RoundLog, RoundRecord, Scoreboard};
use super::snapshot::SessionSnapshot;

/// One session: opponent state, counters, recent rounds, and match progress.
///
/// Generic over the random source so tests can script the opponent.
///
/// ```
/// use rps_engine::core::{EngineConfig, Difficulty};
/// use rps_engine::session::Session;
///
/// let mut session = Session::new(EngineConfig::new().with_difficulty(Difficulty::Hard));
/// let outcome = session.play("rock").unwrap();
/// assert_eq!(outcome.scoreboard.total_rounds, 1);
///
/// assert!(session.play("lizard").is_err());
/// assert_eq!(session.scoreboard().total_rounds, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session<R = GameRng> {
    state: SessionState,
    mode: PlayMode,
    scoreboard: Scoreboard,
    log: RoundLog,
    match_state: MatchState,
    rng: R,
}

impl Session<GameRng> {
    /// Create a session seeded from `config.seed`.
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Rebuild a session from a checkpoint.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Result<Self> {
        snapshot.validate()?;
        Ok(Self {
            state: snapshot.state,
            mode: snapshot.mode,
            scoreboard: snapshot.scoreboard,
            log: snapshot.log,
            match_state: snapshot.match_state,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }

    /// Capture the whole session, RNG position included.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            mode: self.mode,
            scoreboard: self.scoreboard,
            log: self.log.clone(),
            match_state: self.match_state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Replace this session with a checkpoint. On error nothing changes.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<()> {
        *self = Self::from_snapshot(snapshot)?;
        log::info!("session restored at round {}", self.scoreboard.total_rounds);
        Ok(())
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session drawing from the given random source.
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self {
            state: SessionState::from_config(&config),
            mode: config.mode,
            scoreboard: Scoreboard::new(),
            log: RoundLog::new(),
            match_state: MatchState::new(),
            rng,
        }
    }

    /// Play a round from raw caller input.
    ///
    /// Fails with `InvalidChoice` when the input does not name a choice in the
    /// active alphabet; no state changes in that case.
    pub fn play(&mut self, input: &str) -> Result<RoundOutcome> {
        let choice = self.state.alphabet.parse_choice(input).map_err(|err| {
            log::warn!("rejected input {:?}: {}", input, err);
            err
        })?;
        self.play_choice(choice)
    }

    /// Play a round with an already parsed choice.
    pub fn play_choice(&mut self, player: Choice) -> Result<RoundOutcome> {
        let alphabet = self.state.alphabet;
        alphabet.check(player).map_err(|err| {
            log::warn!("rejected choice {}: {}", player, err);
            err
        })?;

        let opponent = choose_opponent_move(self.state.difficulty, &self.state, &mut self.rng);
        let result = resolve(alphabet, player, opponent)?;
        log::debug!("round {}: {} vs {} -> {}", self.scoreboard.total_rounds + 1, player, opponent, result);

        self.state.record_round(player, opponent);
        self.scoreboard.record(result);
        let record = RoundRecord::new(player, opponent, result);
        self.log.push(record);

        let match_progress = match self.mode {
            PlayMode::Single => None,
            PlayMode::Match => {
                self.match_state.record(record);
                Some(MatchProgress::from(&self.match_state))
            }
        };

        Ok(RoundOutcome {
            player,
            opponent,
            result,
            message: result.message(player, opponent),
            scoreboard: self.scoreboard,
            match_progress,
        })
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.state.difficulty != difficulty {
            log::info!("difficulty {} -> {}", self.state.difficulty, difficulty);
        }
        self.state.difficulty = difficulty;
    }

    /// Switch the alphabet for subsequent rounds. History is kept.
    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        if self.state.alphabet != alphabet {
            log::info!("alphabet {} -> {}", self.state.alphabet, alphabet);
        }
        self.state.alphabet = alphabet;
    }

    /// Switch play mode. Any match in progress is discarded; votes are kept.
    pub fn set_mode(&mut self, mode: PlayMode) {
        if self.mode != mode {
            log::info!("mode {:?} -> {:?}", self.mode, mode);
            self.match_state.start_next();
        }
        self.mode = mode;
    }

    /// Clear history, last opponent choice, counters, round log, and match
    /// state. Difficulty, alphabet, and mode are kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.scoreboard.reset();
        self.log.clear();
        self.match_state.reset();
        log::info!("session reset");
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    #[must_use]
    pub fn round_log(&self) -> &RoundLog {
        &self.log
    }

    #[must_use]
    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    #[must_use]
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.state.alphabet
    }
}
