//! The packed representation of one face's eight outer facelets.

use std::fmt;

use crate::geometry::Color;

pub const LANE_COUNT: u8 = 8;
const LANE_BITS: u32 = 8;
const LANE_MASK: u64 = 0xFF;
/// A quarter turn moves every facelet two ring positions: corners stay
/// corners and edges stay edges.
const QUARTER_TURN_BITS: u32 = 2 * LANE_BITS;
/// One in the low bit of every lane.
const LANE_ONES: u64 = 0x0101_0101_0101_0101;

/// `LANE_MASKS[k - 1]` selects lane `k`.
const LANE_MASKS: [u64; LANE_COUNT as usize] = {
    let mut arr = [0; LANE_COUNT as usize];
    let mut i = 0;
    while i < arr.len() {
        arr[i] = LANE_MASK << (i as u32 * LANE_BITS);
        i += 1;
    }
    arr
};

/// Eight lanes of eight bits, lane `k` (1-based) at bits `(k - 1) * 8 ..
/// k * 8`. The lanes walk the face clockwise starting from the top left
/// corner, so odd lanes are corners and even lanes are edges. Only the low
/// three bits of a lane are ever set.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceState(u64);

impl FaceState {
    /// A face with every lane set to `color`.
    pub const fn solid(color: Color) -> FaceState {
        FaceState(LANE_ONES * color as u64)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Decode lane `lane`.
    ///
    /// # Panics
    ///
    /// If `lane` is not in `1..=8`, or if the lane does not hold a color. The
    /// latter can only happen if the packing itself is broken.
    pub fn lane(self, lane: u8) -> Color {
        let raw = (self.0 & LANE_MASKS[lane_index(lane)]) >> lane_shift(lane);
        // Masked to eight bits above
        #[allow(clippy::cast_possible_truncation)]
        let raw = raw as u8;
        Color::try_from(raw).unwrap_or_else(|e| {
            panic!("Representation corruption in face state {self:?} at lane {lane}: {e}")
        })
    }

    /// All eight lanes in ring order.
    pub fn lanes(self) -> [Color; LANE_COUNT as usize] {
        let mut out = [Color::Yellow; LANE_COUNT as usize];
        for (slot, lane) in out.iter_mut().zip(1..=LANE_COUNT) {
            *slot = self.lane(lane);
        }
        out
    }

    #[must_use]
    pub fn with_lane(self, lane: u8, color: Color) -> FaceState {
        let cleared = self.0 & !LANE_MASKS[lane_index(lane)];
        FaceState(cleared | (u64::from(color as u8) << lane_shift(lane)))
    }

    /// Rotate the ring a quarter turn. Clockwise, lane `k` takes the value of
    /// lane `k - 2`, so the top two lanes wrap around to the bottom of the
    /// word; counterclockwise is the reverse.
    #[must_use]
    pub const fn rotated(self, counterclockwise: bool) -> FaceState {
        if counterclockwise {
            FaceState(self.0.rotate_right(QUARTER_TURN_BITS))
        } else {
            FaceState(self.0.rotate_left(QUARTER_TURN_BITS))
        }
    }

    /// Read the three lanes of a strip, in the order given.
    pub fn strip(self, lanes: [u8; 3]) -> [Color; 3] {
        lanes.map(|lane| self.lane(lane))
    }

    /// Overwrite the three lanes of a strip, `strip[i]` going to `lanes[i]`.
    #[must_use]
    pub fn with_strip(self, lanes: [u8; 3], strip: [Color; 3]) -> FaceState {
        let clear = lanes
            .iter()
            .fold(!0, |mask, &lane| mask & !LANE_MASKS[lane_index(lane)]);
        let set = lanes
            .iter()
            .zip(strip)
            .fold(0, |bits, (&lane, color)| {
                bits | (u64::from(color as u8) << lane_shift(lane))
            });
        FaceState((self.0 & clear) | set)
    }

    /// Whether every lane holds `color`.
    pub const fn is_solid(self, color: Color) -> bool {
        self.0 == FaceState::solid(color).0
    }
}

impl fmt::Debug for FaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FaceState({:#018x})", self.0)
    }
}

fn lane_index(lane: u8) -> usize {
    assert!(
        (1..=LANE_COUNT).contains(&lane),
        "Lane {lane} is out of range, expected a value between 1 and {LANE_COUNT}"
    );
    usize::from(lane - 1)
}

fn lane_shift(lane: u8) -> u32 {
    u32::from(lane - 1) * LANE_BITS
}
