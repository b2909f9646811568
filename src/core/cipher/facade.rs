//! Request dispatch.
//!
//! The facade is the single entry point a front end needs: it prepares the
//! text according to the [`TextMode`], checks that the key fits the method,
//! and routes the request to the matching [`Cipher`].

use tracing::{debug, trace};

use super::{Bazeries, Cipher, Polybe, Vigenere};
use crate::core::key::CipherKey;
use crate::core::normalize::{fold, letter_count, normalize};
use crate::core::types::{Direction, Method, TextMode};
use crate::core::validation::validate_key_kind;
use crate::error::CipherError;

/// Output of a cipher request: the full payload, or the reason it was
/// rejected.
pub type CipherResult = Result<String, CipherError>;

/// Stateless dispatcher over the three ciphers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CipherFacade {
    mode: TextMode,
}

impl CipherFacade {
    pub fn new(mode: TextMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> TextMode {
        self.mode
    }

    /// Run one request.
    ///
    /// Validation order: empty input, key kind, then the cipher's own key
    /// checks. Nothing is transformed unless all of them pass.
    ///
    /// Polybe decoding takes the coordinate string as given; every other
    /// request normalizes (strict) or folds (preserve) the text first.
    pub fn apply(
        &self,
        method: Method,
        direction: Direction,
        text: &str,
        key: Option<&CipherKey>,
    ) -> CipherResult {
        let prepared = self.prepare(method, direction, text);
        let letters = letter_count(&prepared);
        debug!(
            method = %method,
            direction = %direction,
            mode = %self.mode,
            letters,
            "applying cipher"
        );

        let result = Self::dispatch(method, direction, &prepared, key);
        match &result {
            Ok(output) => trace!(len = output.len(), "cipher applied"),
            Err(e) => debug!(error = %e, "request rejected"),
        }
        result
    }

    fn dispatch(
        method: Method,
        direction: Direction,
        prepared: &str,
        key: Option<&CipherKey>,
    ) -> CipherResult {
        if is_empty_input(method, direction, prepared) {
            return Err(CipherError::EmptyInput);
        }
        validate_key_kind(method, key)?;

        match (method, key) {
            (Method::Vigenere, Some(CipherKey::Letters(k))) => run(&Vigenere, direction, prepared, k),
            (Method::Bazeries, Some(CipherKey::Numeric(k))) => run(&Bazeries, direction, prepared, k),
            // key kind checked above: only keyless Polybe is left
            _ => run(&Polybe, direction, prepared, &()),
        }
    }

    fn prepare(&self, method: Method, direction: Direction, text: &str) -> String {
        match (method, direction, self.mode) {
            (Method::Polybe, Direction::Decode, _) => text.to_string(),
            (_, _, TextMode::Strict) => normalize(text).into_string(),
            (_, _, TextMode::Preserve) => fold(text),
        }
    }
}

fn is_empty_input(method: Method, direction: Direction, prepared: &str) -> bool {
    match (method, direction) {
        (Method::Polybe, Direction::Decode) => prepared.split_whitespace().next().is_none(),
        _ => letter_count(prepared) == 0,
    }
}

fn run<C: Cipher>(cipher: &C, direction: Direction, text: &str, key: &C::Key) -> CipherResult {
    trace!(cipher = cipher.name(), "dispatching");
    match direction {
        Direction::Encode => cipher.encode(text, key),
        Direction::Decode => cipher.decode(text, key),
    }
}

/// Run one request in strict mode.
///
/// Shorthand for `CipherFacade::default().apply(..)`.
pub fn apply(method: Method, direction: Direction, text: &str, key: Option<&CipherKey>) -> CipherResult {
    CipherFacade::default().apply(method, direction, text, key)
}
