//! Session controller
//!
//! Owns the game and the guess being typed, turns player actions into state
//! transitions and decides when the word service has to be asked. Input is
//! ignored while a request is in flight.
//!
//! Driving a session is a two-step loop: [`Session::handle`] applies an
//! action and may return a [`Request`]; the caller renders the loading state
//! and then awaits [`Session::fulfil`] for that request.

use crate::core::{
    BLANK_ROW, Correctness, GameError, GameState, GuessBuffer, Outcome, ROUNDS, Row, Word,
};
use crate::service::WordService;
use tracing::{error, info, instrument, warn};

/// Placeholder target used until the word of the day arrives
pub const DEFAULT_TARGET: &str = "HELLO";

/// Something the player did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Delete,
    Submit,
    NewGame,
}

/// Work that needs the word service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    FetchTarget,
    Validate,
}

/// Something worth telling the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Won { rounds: usize },
    Lost { target: String },
    NotAWord(String),
    ServiceFailed(String),
}

/// One interactive game session
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    buffer: GuessBuffer,
    loading: bool,
    flagged_invalid: bool,
    fixed_target: bool,
    /// Played whenever no fetched target is available
    placeholder: Word,
}

impl Session {
    /// Session on the placeholder target; call [`Session::start`] to fetch the real one
    ///
    /// # Errors
    /// Only fails if the placeholder itself is not a valid target.
    pub fn new() -> Result<Self, GameError> {
        let game = GameState::initialize(DEFAULT_TARGET)?;
        Ok(Self::from_game(game, false))
    }

    /// Session that always plays `target` and never fetches
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self::from_game(GameState::with_target(target), true)
    }

    fn from_game(game: GameState, fixed_target: bool) -> Self {
        Self {
            placeholder: game.target().clone(),
            game,
            buffer: GuessBuffer::new(),
            loading: false,
            flagged_invalid: false,
            fixed_target,
        }
    }

    /// Begin the session, returning the initial fetch if one is needed
    pub fn start(&mut self) -> Option<Request> {
        if self.fixed_target {
            None
        } else {
            self.loading = true;
            Some(Request::FetchTarget)
        }
    }

    #[must_use]
    pub const fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn guess(&self) -> &str {
        self.buffer.as_str()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the current guess was just rejected by the dictionary
    #[must_use]
    pub const fn is_flagged_invalid(&self) -> bool {
        self.flagged_invalid
    }

    /// Apply a player action
    ///
    /// Returns the service request the action calls for, if any. Every action
    /// is swallowed while a request is in flight.
    pub fn handle(&mut self, action: Action) -> Option<Request> {
        if self.loading {
            return None;
        }

        match action {
            Action::NewGame => return self.new_game(),
            _ if self.game.is_over() => {}
            Action::Letter(c) => {
                if c.is_ascii_alphabetic() {
                    self.buffer.append_letter(c.to_ascii_uppercase());
                    self.flagged_invalid = false;
                }
            }
            Action::Delete => {
                self.buffer.delete_letter();
                self.flagged_invalid = false;
            }
            Action::Submit => {
                if self.buffer.is_full() && self.game.round() < ROUNDS {
                    self.flagged_invalid = false;
                    self.loading = true;
                    return Some(Request::Validate);
                }
            }
        }
        None
    }

    fn new_game(&mut self) -> Option<Request> {
        if !self.game.is_over() {
            return None;
        }
        self.buffer.clear();
        self.flagged_invalid = false;

        if self.fixed_target {
            self.game = self.placeholder_game();
            None
        } else {
            self.loading = true;
            Some(Request::FetchTarget)
        }
    }

    /// Carry out `request` against `service` and clear the loading state
    ///
    /// Service failures are logged and reported as a notice; they never end
    /// the session.
    #[instrument(skip(self, service))]
    pub async fn fulfil<S>(&mut self, service: &S, request: Request) -> Option<Notice>
    where
        S: WordService + ?Sized,
    {
        let notice = match request {
            Request::FetchTarget => self.load_target(service).await,
            Request::Validate => self.commit(service).await,
        };
        self.loading = false;
        notice
    }

    fn placeholder_game(&self) -> GameState {
        GameState::with_target(self.placeholder.clone())
    }

    async fn load_target<S>(&mut self, service: &S) -> Option<Notice>
    where
        S: WordService + ?Sized,
    {
        match service.word_of_the_day().await {
            Ok(word) => match GameState::initialize(&word) {
                Ok(game) => {
                    info!("Target word loaded");
                    self.game = game;
                    None
                }
                Err(e) => {
                    error!(error = %e, "Word of the day is not a playable word");
                    self.game = self.placeholder_game();
                    Some(Notice::ServiceFailed(e.to_string()))
                }
            },
            Err(e) => {
                error!(error = %e, "Falling back to placeholder target");
                self.game = self.placeholder_game();
                Some(Notice::ServiceFailed(e.kind.to_string()))
            }
        }
    }

    async fn commit<S>(&mut self, service: &S) -> Option<Notice>
    where
        S: WordService + ?Sized,
    {
        match self.game.commit_guess(self.buffer.as_str(), service).await {
            Ok(commit) => {
                self.buffer.clear();
                match commit.outcome {
                    Outcome::Won => Some(Notice::Won {
                        rounds: self.game.round(),
                    }),
                    Outcome::Lost => Some(Notice::Lost {
                        target: self.game.target().text().to_string(),
                    }),
                    Outcome::Pending => None,
                }
            }
            Err(GameError::InvalidGuess(word)) => {
                warn!(guess = %word, "Not a word");
                self.flagged_invalid = true;
                Some(Notice::NotAWord(word.text().to_string()))
            }
            Err(GameError::ValidationFailed(e)) => {
                error!(error = %e, "Guess could not be validated");
                Some(Notice::ServiceFailed(e.kind.to_string()))
            }
            Err(e) => {
                warn!(error = %e, "Guess ignored");
                None
            }
        }
    }

    /// All board rows: committed guesses, the row being typed, then blanks
    #[must_use]
    pub fn board(&self) -> Vec<Row> {
        let mut rows = self.game.history().to_vec();
        if !self.game.is_over() && rows.len() < ROUNDS {
            let mark = if self.flagged_invalid {
                Correctness::Invalid
            } else {
                Correctness::None
            };
            rows.push(self.buffer.row(mark));
        }
        rows.resize(ROUNDS, BLANK_ROW);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoredLetter;
    use crate::service::{ServiceError, WordListService};
    use crate::wordlists::loader::words_from_slice;

    struct FixedService {
        word: &'static str,
    }

    #[async_trait::async_trait]
    impl WordService for FixedService {
        async fn word_of_the_day(&self) -> Result<String, ServiceError> {
            Ok(self.word.to_string())
        }

        async fn validate_word(&self, word: &str) -> Result<bool, ServiceError> {
            Ok(word != "ZZZZZ")
        }
    }

    struct Down;

    #[async_trait::async_trait]
    impl WordService for Down {
        async fn word_of_the_day(&self) -> Result<String, ServiceError> {
            Err(ServiceError::fetch_failed("connection refused"))
        }

        async fn validate_word(&self, _word: &str) -> Result<bool, ServiceError> {
            Err(ServiceError::validation_failed("connection refused"))
        }
    }

    fn type_word(session: &mut Session, word: &str) {
        for c in word.chars() {
            assert_eq!(session.handle(Action::Letter(c)), None);
        }
    }

    async fn submit<S: WordService>(session: &mut Session, service: &S, word: &str) -> Option<Notice> {
        type_word(session, word);
        let request = session.handle(Action::Submit).expect("submit should request validation");
        session.fulfil(service, request).await
    }

    #[tokio::test]
    async fn start_fetches_target() {
        let service = FixedService { word: "crane" };
        let mut session = Session::new().unwrap();
        assert_eq!(session.game().target().text(), DEFAULT_TARGET);

        let request = session.start().unwrap();
        assert!(session.is_loading());
        assert_eq!(session.fulfil(&service, request).await, None);
        assert!(!session.is_loading());
        assert_eq!(session.game().target().text(), "CRANE");
    }

    #[tokio::test]
    async fn fetch_failure_keeps_placeholder() {
        let mut session = Session::new().unwrap();
        let request = session.start().unwrap();
        let notice = session.fulfil(&Down, request).await;

        assert!(matches!(notice, Some(Notice::ServiceFailed(_))));
        assert!(!session.is_loading());
        assert_eq!(session.game().target().text(), DEFAULT_TARGET);
    }

    #[tokio::test]
    async fn malformed_target_keeps_placeholder() {
        let service = FixedService { word: "toolong" };
        let mut session = Session::new().unwrap();
        let request = session.start().unwrap();
        let notice = session.fulfil(&service, request).await;

        assert!(matches!(notice, Some(Notice::ServiceFailed(_))));
        assert_eq!(session.game().target().text(), DEFAULT_TARGET);
    }

    #[test]
    fn fixed_target_needs_no_fetch() {
        let mut session = Session::with_target(Word::new("crane").unwrap());
        assert_eq!(session.start(), None);
        assert!(!session.is_loading());
    }

    #[test]
    fn input_is_swallowed_while_loading() {
        let mut session = Session::new().unwrap();
        session.start();
        assert_eq!(session.handle(Action::Letter('A')), None);
        assert_eq!(session.handle(Action::Submit), None);
        assert_eq!(session.guess(), "");
    }

    #[test]
    fn letters_are_filtered_and_uppercased() {
        let mut session = Session::new().unwrap();
        type_word(&mut session, "h3e!l");
        assert_eq!(session.guess(), "HEL");
    }

    #[test]
    fn submit_needs_full_guess() {
        let mut session = Session::new().unwrap();
        type_word(&mut session, "HELL");
        assert_eq!(session.handle(Action::Submit), None);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn accepted_guess_clears_buffer() {
        let service = FixedService { word: "hello" };
        let mut session = Session::new().unwrap();

        assert_eq!(submit(&mut session, &service, "world").await, None);
        assert_eq!(session.guess(), "");
        assert_eq!(session.game().round(), 1);
    }

    #[tokio::test]
    async fn rejected_guess_flags_row_and_stays_editable() {
        let service = FixedService { word: "hello" };
        let mut session = Session::new().unwrap();

        let notice = submit(&mut session, &service, "zzzzz").await;
        assert_eq!(notice, Some(Notice::NotAWord("ZZZZZ".to_string())));
        assert_eq!(session.game().round(), 0);
        assert!(session.game().history().is_empty());
        assert!(session.is_flagged_invalid());
        assert_eq!(session.board()[0][0], ScoredLetter::new('Z', Correctness::Invalid));

        session.handle(Action::Delete);
        assert!(!session.is_flagged_invalid());
        assert_eq!(session.guess(), "ZZZZ");
        assert_eq!(session.board()[0][0].correctness(), Correctness::None);
    }

    #[tokio::test]
    async fn validation_failure_commits_nothing() {
        let mut session = Session::new().unwrap();
        let notice = submit(&mut session, &Down, "world").await;

        assert!(matches!(notice, Some(Notice::ServiceFailed(_))));
        assert!(!session.is_loading());
        assert_eq!(session.game().round(), 0);
        assert_eq!(session.guess(), "WORLD");
    }

    #[tokio::test]
    async fn win_reports_rounds_and_locks_input() {
        let service = FixedService { word: "hello" };
        let mut session = Session::new().unwrap();

        submit(&mut session, &service, "world").await;
        let notice = submit(&mut session, &service, "hello").await;
        assert_eq!(notice, Some(Notice::Won { rounds: 2 }));

        assert_eq!(session.handle(Action::Letter('A')), None);
        assert_eq!(session.guess(), "");
    }

    #[tokio::test]
    async fn loss_reveals_target() {
        let service = WordListService::new(
            words_from_slice(&["hello"]),
            words_from_slice(&["world", "crane", "slate", "pious", "fjord", "jumpy"]),
        );
        let mut session = Session::with_target(Word::new("hello").unwrap());

        let mut last = None;
        for guess in ["world", "crane", "slate", "pious", "fjord", "jumpy"] {
            last = submit(&mut session, &service, guess).await;
        }
        assert_eq!(
            last,
            Some(Notice::Lost {
                target: "HELLO".to_string()
            })
        );
        assert_eq!(session.game().round(), ROUNDS);
    }

    #[tokio::test]
    async fn new_game_only_after_game_over() {
        let service = FixedService { word: "hello" };
        let mut session = Session::new().unwrap();
        assert_eq!(session.handle(Action::NewGame), None);

        submit(&mut session, &service, "hello").await;
        let request = session.handle(Action::NewGame).unwrap();
        assert_eq!(request, Request::FetchTarget);
        session.fulfil(&service, request).await;

        assert_eq!(session.game().round(), 0);
        assert!(!session.game().is_over());
    }

    #[tokio::test]
    async fn new_game_with_fixed_target_replays_it() {
        let service = FixedService { word: "crane" };
        let mut session = Session::with_target(Word::new("hello").unwrap());
        submit(&mut session, &service, "hello").await;

        assert_eq!(session.handle(Action::NewGame), None);
        assert_eq!(session.game().round(), 0);
        assert_eq!(session.game().target().text(), "HELLO");
    }

    #[tokio::test]
    async fn new_game_falls_back_to_placeholder_when_fetch_fails() {
        let service = FixedService { word: "crane" };
        let mut session = Session::new().unwrap();
        let request = session.start().unwrap();
        session.fulfil(&service, request).await;
        assert_eq!(
            submit(&mut session, &service, "crane").await,
            Some(Notice::Won { rounds: 1 })
        );

        let request = session.handle(Action::NewGame).unwrap();
        let notice = session.fulfil(&Down, request).await;

        assert!(matches!(notice, Some(Notice::ServiceFailed(_))));
        assert_eq!(session.game().target().text(), DEFAULT_TARGET);
        assert_eq!(session.game().round(), 0);
        assert!(!session.game().is_over());
    }

    #[tokio::test]
    async fn new_game_with_malformed_fetch_falls_back_to_placeholder() {
        let mut session = Session::new().unwrap();
        let request = session.start().unwrap();
        session.fulfil(&FixedService { word: "crane" }, request).await;
        submit(&mut session, &FixedService { word: "crane" }, "crane").await;

        let request = session.handle(Action::NewGame).unwrap();
        session.fulfil(&FixedService { word: "toolong" }, request).await;

        assert_eq!(session.game().target().text(), DEFAULT_TARGET);
        assert_eq!(session.game().round(), 0);
    }

    #[test]
    fn board_always_has_every_round() {
        let mut session = Session::new().unwrap();
        type_word(&mut session, "CR");
        let board = session.board();

        assert_eq!(board.len(), ROUNDS);
        assert_eq!(board[0][1], ScoredLetter::new('R', Correctness::None));
        assert!(board[1..].iter().all(|row| *row == BLANK_ROW));
    }
}
