//! Equal-run collapsing.
//!
//! A run of identical chunk pairs is shown as its first pair, one ellipsis
//! line, then nothing, unless "show all" is set, in which case every pair is
//! printed and no ellipsis appears.

use crate::classify::Classification;

/// What the driver should emit for the current chunk pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render highlighted; the run is broken
    Diff,
    /// Render plain
    Same,
    /// Print the ellipsis line in place of the pair
    Ellipsis,
    /// Print nothing
    Suppress,
}

/// Position within a run of equal pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No equal pair since the last difference (or since the start)
    Fresh,
    /// This many consecutive equal pairs seen
    Running(u64),
}

#[derive(Debug, Clone)]
pub struct RunCollapser {
    show_all: bool,
    run: u64,
}

impl RunCollapser {
    pub fn new(show_all: bool) -> Self {
        Self { show_all, run: 0 }
    }

    pub fn state(&self) -> RunState {
        match self.run {
            0 => RunState::Fresh,
            n => RunState::Running(n),
        }
    }

    /// Advance by one chunk pair and decide its output.
    pub fn step(&mut self, class: &Classification) -> Action {
        if !class.all_equal() {
            self.run = 0;
            return Action::Diff;
        }

        let action = match self.run {
            0 => Action::Same,
            _ if self.show_all => Action::Same,
            1 => Action::Ellipsis,
            _ => Action::Suppress,
        };
        self.run = self.run.saturating_add(1);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::CHUNK_SIZE;

    fn equal() -> Classification {
        Classification::from_flags([true; CHUNK_SIZE])
    }

    fn unequal() -> Classification {
        let mut flags = [true; CHUNK_SIZE];
        flags[2] = false;
        Classification::from_flags(flags)
    }

    #[test]
    fn test_collapsed_run() {
        let mut rc = RunCollapser::new(false);
        let actions: Vec<_> = (0..5).map(|_| rc.step(&equal())).collect();
        assert_eq!(
            actions,
            vec![
                Action::Same,
                Action::Ellipsis,
                Action::Suppress,
                Action::Suppress,
                Action::Suppress
            ]
        );
        assert_eq!(rc.state(), RunState::Running(5));
    }

    #[test]
    fn test_difference_resets_run() {
        let mut rc = RunCollapser::new(false);
        rc.step(&equal());
        rc.step(&equal());
        assert_eq!(rc.step(&unequal()), Action::Diff);
        assert_eq!(rc.state(), RunState::Fresh);
        assert_eq!(rc.step(&equal()), Action::Same);
        assert_eq!(rc.step(&equal()), Action::Ellipsis);
    }

    #[test]
    fn test_show_all_never_collapses() {
        let mut rc = RunCollapser::new(true);
        for _ in 0..10 {
            assert_eq!(rc.step(&equal()), Action::Same);
        }
    }

    #[test]
    fn test_diff_from_fresh_stays_fresh() {
        let mut rc = RunCollapser::new(false);
        assert_eq!(rc.step(&unequal()), Action::Diff);
        assert_eq!(rc.step(&unequal()), Action::Diff);
        assert_eq!(rc.state(), RunState::Fresh);
    }
}
