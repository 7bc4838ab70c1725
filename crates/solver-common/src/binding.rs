use crate::desire::Desire;

/// The result of applying one binding function to a desire: a next desire to
/// resolve, whether resolution should terminate there even if the next
/// desire isn't yet instantiable, and whether this result should be
/// deferred.
///
/// Per the FIXME in the originating design around deferred binding results:
/// this spec does not implement deferral. [`BindingResult::terminates`]
/// folds `defer` in as `terminates = false` so callers never need to branch
/// on it separately — see `SPEC_FULL.md` §9.
#[derive(Debug, Clone)]
pub struct BindingResult {
    next_desire: Desire,
    terminates: bool,
    defer: bool,
}

impl BindingResult {
    pub fn new(next_desire: Desire, terminates: bool) -> Self {
        Self {
            next_desire,
            terminates,
            defer: false,
        }
    }

    pub fn deferred(next_desire: Desire, terminates: bool) -> Self {
        Self {
            next_desire,
            terminates,
            defer: true,
        }
    }

    pub fn next_desire(&self) -> &Desire {
        &self.next_desire
    }

    pub fn into_next_desire(self) -> Desire {
        self.next_desire
    }

    pub fn terminates(&self) -> bool {
        self.terminates && !self.defer
    }

    pub fn is_deferred(&self) -> bool {
        self.defer
    }
}
