use crate::state::DECOR_POOL;

/// How many confetti pieces the celebration overlay renders.
pub const CONFETTI_PIECES: usize = 160;
/// Palette slots the view maps to actual colors.
pub const CONFETTI_COLORS: u8 = 6;

const DECOR_SPREAD_PCT: f64 = 80.0;
const CONFETTI_DELAY_MAX_MS: u32 = 4_000;
const CONFETTI_FALL_MIN_MS: u32 = 3_000;
const CONFETTI_FALL_MAX_MS: u32 = 7_000;
const CONFETTI_SIZE_MIN_PX: f64 = 6.0;
const CONFETTI_SIZE_MAX_PX: f64 = 12.0;
const CONFETTI_DRIFT_MAX_PX: f64 = 120.0;

pub fn splitmix64(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = value;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

fn rand_unit(seed: u64, salt: u64) -> f64 {
    let mixed = splitmix64(seed ^ salt);
    let top = mixed >> 11;
    top as f64 / ((1u64 << 53) as f64)
}

fn rand_range(seed: u64, salt: u64, min: f64, max: f64) -> f64 {
    min + (max - min) * rand_unit(seed, salt)
}

/// Mixes the compile-time base seed with a per-session nonce.
pub fn layout_seed(base: u64, nonce: u64) -> u64 {
    splitmix64(base ^ nonce.wrapping_mul(0x9e3779b97f4a7c15))
}

/// Where one pleading image sits. Percent offsets of the viewport plus a
/// rotation, fixed for the whole session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorSpot {
    pub top_pct: f64,
    pub left_pct: f64,
    pub rotation_deg: f64,
}

/// The full decorative position pool, computed once at initialization and
/// revealed incrementally as rejections accumulate. Never regenerated, so
/// already-visible images stay put across renders.
pub fn decor_table(seed: u64) -> [DecorSpot; DECOR_POOL] {
    let mut spots = [DecorSpot {
        top_pct: 0.0,
        left_pct: 0.0,
        rotation_deg: 0.0,
    }; DECOR_POOL];
    for (index, spot) in spots.iter_mut().enumerate() {
        let salt = (index as u64) * 3;
        *spot = DecorSpot {
            top_pct: rand_range(seed, salt, 0.0, DECOR_SPREAD_PCT),
            left_pct: rand_range(seed, salt + 1, 0.0, DECOR_SPREAD_PCT),
            rotation_deg: rand_range(seed, salt + 2, 0.0, 360.0),
        };
    }
    spots
}

/// One confetti piece of the celebration burst. Horizontal placement is a
/// percentage so the table survives window resizes unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_pct: f64,
    pub drift_px: f64,
    pub delay_ms: u32,
    pub fall_ms: u32,
    pub size_px: f64,
    pub spin_deg: f64,
    pub color: u8,
}

pub fn confetti_burst(seed: u64, count: usize) -> Vec<ConfettiPiece> {
    let seed = splitmix64(seed ^ 0xC0F_E771);
    let mut pieces = Vec::with_capacity(count);
    for index in 0..count {
        let salt = (index as u64) * 7;
        pieces.push(ConfettiPiece {
            left_pct: rand_range(seed, salt, 0.0, 100.0),
            drift_px: rand_range(seed, salt + 1, -CONFETTI_DRIFT_MAX_PX, CONFETTI_DRIFT_MAX_PX),
            delay_ms: rand_range(seed, salt + 2, 0.0, CONFETTI_DELAY_MAX_MS as f64) as u32,
            fall_ms: rand_range(
                seed,
                salt + 3,
                CONFETTI_FALL_MIN_MS as f64,
                CONFETTI_FALL_MAX_MS as f64,
            ) as u32,
            size_px: rand_range(seed, salt + 4, CONFETTI_SIZE_MIN_PX, CONFETTI_SIZE_MAX_PX),
            spin_deg: rand_range(seed, salt + 5, 0.0, 360.0),
            color: (splitmix64(seed ^ (salt + 6)) % CONFETTI_COLORS as u64) as u8,
        });
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decor_table_is_deterministic_per_seed() {
        let a = decor_table(0x5EED);
        let b = decor_table(0x5EED);
        let c = decor_table(0x5EEE);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn decor_spots_stay_in_range() {
        for spot in decor_table(layout_seed(0xBE_111E, 42)) {
            assert!((0.0..DECOR_SPREAD_PCT).contains(&spot.top_pct));
            assert!((0.0..DECOR_SPREAD_PCT).contains(&spot.left_pct));
            assert!((0.0..360.0).contains(&spot.rotation_deg));
        }
    }

    #[test]
    fn confetti_burst_respects_count_and_ranges() {
        let pieces = confetti_burst(7, CONFETTI_PIECES);
        assert_eq!(pieces.len(), CONFETTI_PIECES);
        for piece in pieces {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!(piece.drift_px.abs() <= CONFETTI_DRIFT_MAX_PX);
            assert!(piece.delay_ms < CONFETTI_DELAY_MAX_MS);
            assert!((CONFETTI_FALL_MIN_MS..CONFETTI_FALL_MAX_MS).contains(&piece.fall_ms));
            assert!((CONFETTI_SIZE_MIN_PX..=CONFETTI_SIZE_MAX_PX).contains(&piece.size_px));
            assert!(piece.color < CONFETTI_COLORS);
        }
    }
}
