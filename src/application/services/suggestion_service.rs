use tracing::trace;

/// Characters that start a completable word.
pub const TRIGGER_CHARS: [char; 3] = ['@', ':', '.'];

/// Caret selection in a text buffer, as char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    #[must_use]
    pub const fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }
}

/// Word found under the caret. `begin` is inclusive, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    pub word: String,
    pub begin: usize,
    pub end: usize,
    /// True when whitespace lies between the trigger and the caret.
    pub divided: bool,
}

/// Finds the word ending at the caret.
///
/// The word starts at the nearest trigger char left of the caret, or just
/// after the nearest whitespace when there is no trigger.
#[must_use]
pub fn get_current_word(selection: Selection, text: &str) -> Target {
    let chars: Vec<char> = text.chars().collect();
    let start = selection.start.min(chars.len());
    let end = selection.end.clamp(start, chars.len());
    let before = &chars[..start];

    let trigger = before.iter().rposition(|c| TRIGGER_CHARS.contains(c));
    let space = before.iter().rposition(|c| c.is_whitespace());

    let begin = trigger.unwrap_or_else(|| space.map_or(0, |i| i + 1));
    let divided = trigger.is_some() && space.is_some_and(|s| s > begin);

    Target {
        word: chars[begin..end].iter().collect(),
        begin,
        end,
        divided,
    }
}

/// Longest prefix shared by every candidate, compared case-insensitively
/// per code point and returned in lowercase.
#[must_use]
pub fn get_determined_characters<S: AsRef<str>>(candidates: &[S]) -> String {
    let lowered: Vec<Vec<char>> = candidates
        .iter()
        .map(|c| c.as_ref().chars().flat_map(char::to_lowercase).collect())
        .collect();

    let Some((first, rest)) = lowered.split_first() else {
        return String::new();
    };

    let shared = rest.iter().fold(first.len(), |len, other| {
        first
            .iter()
            .zip(other)
            .take(len)
            .take_while(|(a, b)| a == b)
            .count()
    });

    first[..shared].iter().collect()
}

fn list_len<T>(list: &[T]) -> isize {
    isize::try_from(list.len()).unwrap_or(isize::MAX)
}

/// Steps back through `list`. `-1` is the "nothing selected" slot: stepping
/// back from it wraps to the last index, and stepping back from index 0
/// lands on it. `None` yields `-1`.
#[must_use]
pub fn get_prev_candidate_index<T>(list: &[T], current: Option<isize>) -> isize {
    match current {
        None => -1,
        Some(i) if i <= -1 => list_len(list) - 1,
        Some(i) => i - 1,
    }
}

/// Steps forward through `list`. Past the last index the result is `-1`
/// rather than a wrap to 0. `None` yields `-1`.
#[must_use]
pub fn get_next_candidate_index<T>(list: &[T], current: Option<isize>) -> isize {
    match current {
        None => -1,
        Some(i) if i >= list_len(list) - 1 => -1,
        Some(i) => i + 1,
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionState {
    pub active: bool,
    pub target: Target,
    pub results: Vec<String>,
    /// Index into `results`, `-1` when the typed word itself is selected.
    pub selected_index: isize,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self {
            active: false,
            target: Target::default(),
            results: Vec::new(),
            selected_index: -1,
        }
    }
}

impl SuggestionState {
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        usize::try_from(self.selected_index)
            .ok()
            .and_then(|i| self.results.get(i))
            .map(String::as_str)
    }
}

pub struct SuggestionService {
    state: SuggestionState,
}

impl SuggestionService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SuggestionState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = SuggestionState::default();
    }

    /// Re-reads the word under the caret. Returns true if the state changed.
    pub fn process_input(&mut self, text: &str, selection: Selection) -> bool {
        let target = get_current_word(selection, text);
        let completable = !target.divided
            && target
                .word
                .chars()
                .next()
                .is_some_and(|c| TRIGGER_CHARS.contains(&c));

        if !completable {
            if self.state.active {
                self.reset();
                return true;
            }
            return false;
        }

        if self.state.active && self.state.target == target {
            return false;
        }

        trace!(word = %target.word, "suggestion target changed");
        self.state.active = true;
        self.state.target = target;
        self.state.selected_index = -1;
        true
    }

    /// Keeps the candidates that start with the current word, ignoring case.
    pub fn update_results(&mut self, candidates: Vec<String>) {
        let word = self.state.target.word.to_lowercase();
        self.state.results = candidates
            .into_iter()
            .filter(|c| c.to_lowercase().starts_with(&word))
            .collect();
        self.state.selected_index = -1;
    }

    /// Prefix every remaining candidate agrees on.
    #[must_use]
    pub fn determined(&self) -> String {
        get_determined_characters(&self.state.results)
    }

    pub fn select_next(&mut self) {
        self.state.selected_index =
            get_next_candidate_index(&self.state.results, Some(self.state.selected_index));
    }

    pub fn select_previous(&mut self) {
        self.state.selected_index =
            get_prev_candidate_index(&self.state.results, Some(self.state.selected_index));
    }

    /// Replaces the current word with the selected candidate.
    ///
    /// Returns the new text and caret position, or `None` when nothing is
    /// selected.
    #[must_use]
    pub fn confirm(&self, text: &str) -> Option<(String, usize)> {
        let candidate = self.state.selected()?;
        let target = &self.state.target;

        let chars: Vec<char> = text.chars().collect();
        let begin = target.begin.min(chars.len());
        let end = target.end.clamp(begin, chars.len());

        let mut replaced: String = chars[..begin].iter().collect();
        replaced.push_str(candidate);
        replaced.extend(&chars[end..]);

        Some((replaced, begin + candidate.chars().count()))
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::new()
    }
}
