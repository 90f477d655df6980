use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    NotLoaded,
    Loaded,
}

/// What the embed knows about its surroundings at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatchInputs {
    pub visible: bool,
    pub in_view: bool,
    pub thumbnail_only: bool,
}

/// One-way load switch for an embed.
///
/// `seen` records that the container entered the viewport (margin included)
/// at least once. The phase moves from `NotLoaded` to `Loaded` the first time
/// the embed is visible, seen and not thumbnail-only; neither field is ever
/// cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadLatch {
    seen: bool,
    phase: LoadPhase,
}

impl Default for LoadLatch {
    fn default() -> Self {
        Self {
            seen: false,
            phase: LoadPhase::NotLoaded,
        }
    }
}

impl LoadLatch {
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase() == LoadPhase::Loaded
    }

    pub fn observe(self, inputs: LatchInputs) -> Self {
        let seen = self.seen || inputs.in_view;
        let phase = match self.phase {
            LoadPhase::Loaded => LoadPhase::Loaded,
            LoadPhase::NotLoaded if inputs.visible && seen && !inputs.thumbnail_only => {
                LoadPhase::Loaded
            }
            LoadPhase::NotLoaded => LoadPhase::NotLoaded,
        };
        Self { seen, phase }
    }
}

impl Reducible for LoadLatch {
    type Action = LatchInputs;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).observe(action);
        if next == *self {
            self
        } else {
            if next.is_loaded() && !self.is_loaded() {
                log::debug!("Embed load latch set");
            }
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(visible: bool, in_view: bool, thumbnail_only: bool) -> LatchInputs {
        LatchInputs {
            visible,
            in_view,
            thumbnail_only,
        }
    }

    fn run(steps: &[LatchInputs]) -> Vec<LoadPhase> {
        let mut latch = LoadLatch::default();
        steps
            .iter()
            .map(|step| {
                latch = latch.observe(*step);
                latch.phase()
            })
            .collect()
    }

    #[test]
    fn sets_only_when_all_three_conditions_hold() {
        assert_eq!(run(&[inputs(true, true, false)]), vec![LoadPhase::Loaded]);
        assert_eq!(run(&[inputs(false, true, false)]), vec![LoadPhase::NotLoaded]);
        assert_eq!(run(&[inputs(true, false, false)]), vec![LoadPhase::NotLoaded]);
        assert_eq!(run(&[inputs(true, true, true)]), vec![LoadPhase::NotLoaded]);
    }

    #[test]
    fn earlier_intersection_counts_once_visible() {
        let phases = run(&[
            inputs(false, true, false),
            inputs(false, false, false),
            inputs(true, false, false),
        ]);
        assert_eq!(
            phases,
            vec![LoadPhase::NotLoaded, LoadPhase::NotLoaded, LoadPhase::Loaded]
        );
    }

    #[test]
    fn never_unsets_while_mounted() {
        let phases = run(&[
            inputs(true, true, false),
            inputs(false, false, false),
            inputs(false, false, true),
            inputs(true, true, false),
        ]);
        assert!(phases.iter().all(|p| *p == LoadPhase::Loaded));
    }

    #[test]
    fn transitions_at_most_once() {
        let steps = [
            inputs(false, false, false),
            inputs(true, true, false),
            inputs(true, true, false),
            inputs(false, true, false),
            inputs(true, false, false),
        ];
        let phases = run(&steps);
        let transitions = phases
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count();
        assert_eq!(transitions, 1);
    }

    #[test]
    fn thumbnail_only_never_loads() {
        let phases = run(&[
            inputs(true, true, true),
            inputs(true, false, true),
            inputs(false, true, true),
        ]);
        assert!(phases.iter().all(|p| *p == LoadPhase::NotLoaded));
    }

    #[test]
    fn hidden_throughout_never_loads() {
        let phases = run(&[
            inputs(false, true, false),
            inputs(false, false, false),
            inputs(false, true, false),
        ]);
        assert!(phases.iter().all(|p| *p == LoadPhase::NotLoaded));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let latch = Rc::new(LoadLatch::default());
        let same = latch.clone().reduce(inputs(false, false, false));
        assert!(Rc::ptr_eq(&latch, &same));
    }
}
