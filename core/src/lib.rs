pub mod layout;
pub mod state;

pub use layout::{
    confetti_burst, decor_table, layout_seed, ConfettiPiece, DecorSpot, CONFETTI_COLORS,
    CONFETTI_PIECES,
};
pub use state::{
    ProposalState, BASELINE_SIZE, DECOR_FREE_REJECTIONS, DECOR_POOL, NO_FLOOR, NO_HIDE_SIZE,
    NO_SHRINK_STEP, TAUNTS, YES_GROW_STEP,
};
