/// Baseline visual scale both buttons start at.
pub const BASELINE_SIZE: f64 = 100.0;
/// How much the No button shrinks per rejection.
pub const NO_SHRINK_STEP: f64 = 10.0;
/// How much the Yes button grows per rejection. Larger than the shrink step
/// so acceptance dominates the page faster than rejection fades.
pub const YES_GROW_STEP: f64 = 15.0;
/// The No button never shrinks past this scale.
pub const NO_FLOOR: f64 = 20.0;
/// The No button is rendered only while its scale exceeds this.
pub const NO_HIDE_SIZE: f64 = 15.0;
/// Rejections that pass before the first pleading image appears.
pub const DECOR_FREE_REJECTIONS: u32 = 3;
/// Size of the fixed decorative position pool.
pub const DECOR_POOL: usize = 10;

pub const TAUNTS: [&str; 10] = [
    "No",
    "Are you sure?",
    "You might regret?",
    "Please reconsider!",
    "Really?",
    "Think again!",
    "Last chance!",
    "Don't be silly!",
    "Please click Yes \u{1f97a}",
    "Pretty please?",
];

/// The whole mutable state of the page. Created once at mount, mutated only
/// by the three operations below, discarded with the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProposalState {
    pub no_size: f64,
    pub yes_size: f64,
    pub rejection_count: u32,
    pub accepted: bool,
    pub muted: bool,
}

impl ProposalState {
    pub fn new() -> Self {
        Self {
            no_size: BASELINE_SIZE,
            yes_size: BASELINE_SIZE,
            rejection_count: 0,
            accepted: false,
            muted: false,
        }
    }

    /// One press of the No button. Shrinks No, grows Yes and counts the
    /// rejection, but only while the No button is still above its floor;
    /// at or below the floor the press changes nothing.
    pub fn reject(&mut self) -> bool {
        if self.no_size <= NO_FLOOR {
            return false;
        }
        self.no_size -= NO_SHRINK_STEP;
        self.yes_size += YES_GROW_STEP;
        self.rejection_count += 1;
        true
    }

    /// One press of the Yes button. One-way: nothing un-accepts.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Label for the No button; walks the taunt list and sticks on the last
    /// entry once exhausted.
    pub fn taunt(&self) -> &'static str {
        let index = (self.rejection_count as usize).min(TAUNTS.len() - 1);
        TAUNTS[index]
    }

    pub fn no_visible(&self) -> bool {
        self.no_size > NO_HIDE_SIZE
    }

    /// How many pleading images the asking view shows. None until the
    /// rejection count clears `DECOR_FREE_REJECTIONS`, then one per further
    /// rejection up to the position pool size.
    pub fn decor_count(&self) -> usize {
        (self.rejection_count.saturating_sub(DECOR_FREE_REJECTIONS) as usize).min(DECOR_POOL)
    }
}

impl Default for ProposalState {
    fn default() -> Self {
        Self::new()
    }
}
